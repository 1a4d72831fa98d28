//! Match factory for creating test match entities.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture::r#match::{default_date, default_time};

/// Factory for creating test matches within an existing division.
///
/// # Example
///
/// ```rust,ignore
/// let played = MatchFactory::new(&db, division.id)
///     .teams(1, 2)
///     .score(3, 2)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    division_id: i32,
    matchweek: i32,
    date: NaiveDate,
    time: NaiveTime,
    home_team_id: i32,
    away_team_id: i32,
    goals_home_team: Option<i32>,
    goals_away_team: Option<i32>,
    status_id: Option<i32>,
    referee_id: Option<i32>,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - matchweek: `1`
    /// - date/time: the fixture defaults
    /// - home_team_id / away_team_id: `1` / `2`
    /// - goals, status, referee: `None`
    pub fn new(db: &'a DatabaseConnection, division_id: i32) -> Self {
        Self {
            db,
            division_id,
            matchweek: 1,
            date: default_date(),
            time: default_time(),
            home_team_id: 1,
            away_team_id: 2,
            goals_home_team: None,
            goals_away_team: None,
            status_id: None,
            referee_id: None,
        }
    }

    pub fn matchweek(mut self, matchweek: i32) -> Self {
        self.matchweek = matchweek;
        self
    }

    pub fn kickoff(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.date = date;
        self.time = time;
        self
    }

    pub fn teams(mut self, home_team_id: i32, away_team_id: i32) -> Self {
        self.home_team_id = home_team_id;
        self.away_team_id = away_team_id;
        self
    }

    pub fn score(mut self, goals_home_team: i32, goals_away_team: i32) -> Self {
        self.goals_home_team = Some(goals_home_team);
        self.goals_away_team = Some(goals_away_team);
        self
    }

    pub fn status(mut self, status_id: Option<i32>) -> Self {
        self.status_id = status_id;
        self
    }

    pub fn referee(mut self, referee_id: Option<i32>) -> Self {
        self.referee_id = referee_id;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::r#match::Model, DbErr> {
        entity::r#match::ActiveModel {
            division_id: ActiveValue::Set(self.division_id),
            matchweek: ActiveValue::Set(self.matchweek),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            home_team_id: ActiveValue::Set(self.home_team_id),
            away_team_id: ActiveValue::Set(self.away_team_id),
            goals_home_team: ActiveValue::Set(self.goals_home_team),
            goals_away_team: ActiveValue::Set(self.goals_away_team),
            status_id: ActiveValue::Set(self.status_id),
            referee_id: ActiveValue::Set(self.referee_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unplayed match with default values in the given division.
pub async fn create_match(
    db: &DatabaseConnection,
    division_id: i32,
) -> Result<entity::r#match::Model, DbErr> {
    MatchFactory::new(db, division_id).build().await
}
