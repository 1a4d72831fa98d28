//! CSV seeding of the teams and matches stores.
//!
//! Every file has a header row. Id columns of `teams.csv`, `divisions.csv` and
//! `status.csv` are not read: rows get their ids from the store in file order, so a
//! fresh store ends up with the same ids the matches files refer to.

use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveTime};
use csv::{Reader, StringRecord};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::server::error::{seed::SeedError, AppError};

/// Loads `clubs.csv` and `teams.csv` from `dir`.
pub async fn seed_teams(db: &DatabaseConnection, dir: &Path) -> Result<(), AppError> {
    let clubs = read_clubs("clubs.csv", Reader::from_path(dir.join("clubs.csv"))?)?;
    let teams = read_teams("teams.csv", Reader::from_path(dir.join("teams.csv"))?)?;

    let txn = db.begin().await?;
    let count = clubs.len();
    if !clubs.is_empty() {
        entity::prelude::Club::insert_many(clubs)
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;
    tracing::info!("Seeded {} clubs", count);

    let txn = db.begin().await?;
    let count = teams.len();
    if !teams.is_empty() {
        entity::prelude::Team::insert_many(teams)
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;
    tracing::info!("Seeded {} teams", count);

    Ok(())
}

/// Loads `divisions.csv`, `referees.csv`, `status.csv` and every `matches_*.csv` from
/// `dir`. Match files are loaded in file name order.
pub async fn seed_matches(db: &DatabaseConnection, dir: &Path) -> Result<(), AppError> {
    let divisions = read_divisions(
        "divisions.csv",
        Reader::from_path(dir.join("divisions.csv"))?,
    )?;
    let referees = read_referees("referees.csv", Reader::from_path(dir.join("referees.csv"))?)?;
    let statuses = read_statuses("status.csv", Reader::from_path(dir.join("status.csv"))?)?;

    let txn = db.begin().await?;
    let count = divisions.len();
    if !divisions.is_empty() {
        entity::prelude::Division::insert_many(divisions)
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;
    tracing::info!("Seeded {} divisions", count);

    let txn = db.begin().await?;
    let count = referees.len();
    if !referees.is_empty() {
        entity::prelude::Referee::insert_many(referees)
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;
    tracing::info!("Seeded {} referees", count);

    let txn = db.begin().await?;
    let count = statuses.len();
    if !statuses.is_empty() {
        entity::prelude::Status::insert_many(statuses)
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;
    tracing::info!("Seeded {} status values", count);

    for path in match_files(dir)? {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let matches = read_matches(&file, Reader::from_path(&path)?)?;

        let txn = db.begin().await?;
        let count = matches.len();
        if !matches.is_empty() {
            entity::prelude::Match::insert_many(matches)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;
        tracing::info!("Seeded {} matches from {}", count, file);
    }

    Ok(())
}

fn match_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_match_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("matches_") && name.ends_with(".csv"));
        if is_match_file {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Column accessors for one data row, reporting the file, row and column on failure.
struct Row<'a> {
    file: &'a str,
    row: usize,
    record: StringRecord,
}

impl Row<'_> {
    fn text(&self, column: usize) -> Result<String, SeedError> {
        self.record
            .get(column)
            .map(|value| value.trim().to_string())
            .ok_or_else(|| SeedError::MissingField {
                file: self.file.to_string(),
                row: self.row,
                column,
            })
    }

    /// Empty means none.
    fn optional_text(&self, column: usize) -> Result<Option<String>, SeedError> {
        let value = self.text(column)?;
        Ok((!value.is_empty()).then_some(value))
    }

    fn number(&self, column: usize) -> Result<i32, SeedError> {
        let value = self.text(column)?;
        value.parse().map_err(|_| self.invalid(column, value))
    }

    /// `NULL` means none.
    fn nullable_number(&self, column: usize) -> Result<Option<i32>, SeedError> {
        let value = self.text(column)?;
        if value == "NULL" {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| self.invalid(column, value))
    }

    fn date(&self, column: usize) -> Result<NaiveDate, SeedError> {
        let value = self.text(column)?;
        NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| self.invalid(column, value))
    }

    /// Accepts both `HH:MM:SS` and `HH:MM`.
    fn time(&self, column: usize) -> Result<NaiveTime, SeedError> {
        let value = self.text(column)?;
        NaiveTime::parse_from_str(&value, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M"))
            .map_err(|_| self.invalid(column, value))
    }

    fn invalid(&self, column: usize, value: String) -> SeedError {
        SeedError::InvalidField {
            file: self.file.to_string(),
            row: self.row,
            column,
            value,
        }
    }
}

/// Reads every data row of `reader`, skipping the header, and maps it with `parse`.
fn read_rows<R, T>(
    file: &str,
    mut reader: Reader<R>,
    parse: impl Fn(&Row) -> Result<T, SeedError>,
) -> Result<Vec<T>, AppError>
where
    R: io::Read,
{
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = Row {
            file,
            row: index + 1,
            record: record?,
        };
        rows.push(parse(&row)?);
    }

    Ok(rows)
}

fn read_clubs<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::club::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::club::ActiveModel {
            stamnumber: ActiveValue::Set(row.number(0)?),
            name: ActiveValue::Set(row.text(1)?),
            address: ActiveValue::Set(row.text(2)?),
            zipcode: ActiveValue::Set(row.number(3)?),
            city: ActiveValue::Set(row.text(4)?),
            website: ActiveValue::Set(row.optional_text(5)?),
        })
    })
}

fn read_teams<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::team::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            stamnumber: ActiveValue::Set(row.number(1)?),
            suffix: ActiveValue::Set(row.optional_text(2)?),
            color: ActiveValue::Set(row.text(3)?),
        })
    })
}

fn read_divisions<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::division::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::division::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(row.text(1)?),
        })
    })
}

fn read_statuses<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::status::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::status::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(row.text(1)?),
        })
    })
}

fn read_referees<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::referee::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::referee::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(row.text(0)?),
            last_name: ActiveValue::Set(row.text(1)?),
            address: ActiveValue::Set(row.text(2)?),
            zip_code: ActiveValue::Set(row.number(3)?),
            city: ActiveValue::Set(row.text(4)?),
            phone_number: ActiveValue::Set(row.text(5)?),
            email: ActiveValue::Set(row.text(6)?),
            birth_date: ActiveValue::Set(row.date(7)?),
        })
    })
}

fn read_matches<R: io::Read>(
    file: &str,
    reader: Reader<R>,
) -> Result<Vec<entity::r#match::ActiveModel>, AppError> {
    read_rows(file, reader, |row| {
        Ok(entity::r#match::ActiveModel {
            id: ActiveValue::NotSet,
            division_id: ActiveValue::Set(row.number(0)?),
            matchweek: ActiveValue::Set(row.number(1)?),
            date: ActiveValue::Set(row.date(2)?),
            time: ActiveValue::Set(row.time(3)?),
            home_team_id: ActiveValue::Set(row.number(4)?),
            away_team_id: ActiveValue::Set(row.number(5)?),
            goals_home_team: ActiveValue::Set(row.nullable_number(6)?),
            goals_away_team: ActiveValue::Set(row.nullable_number(7)?),
            status_id: ActiveValue::Set(row.nullable_number(8)?),
            referee_id: ActiveValue::Set(None),
        })
    })
}
