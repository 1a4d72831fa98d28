//! Match business logic.
//!
//! Creating or updating a match with a referee first loads that referee's other
//! bookings and rejects the write when one of them kicks off at the same date and
//! time. The store additionally carries a unique index on (date, time, referee), so
//! a booking that slips past the check between read and write is still refused.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::r#match::MatchRepository,
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::r#match::{find_double_booking, Match, MatchParam},
};

pub const MATCH_CREATED: &str = "Match successfully created!";
pub const MATCH_NOT_FOUND: &str = "Match does not exist";
pub const MATCH_UPDATED: &str = "Match updated.";
pub const MATCH_DELETED: &str = "Match deleted";
pub const MATCH_DELETE_FAILED: &str = "Failed to delete match";
pub const REFEREE_DOUBLE_BOOKED: &str = "Referee double booked";

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a new match.
    ///
    /// # Returns
    /// - `Ok(Match)` - The created match
    /// - `Err(AppError::BadRequest)` - The referee is already booked at that date and time,
    ///   or the division, status or referee does not exist
    pub async fn create(&self, param: MatchParam) -> Result<Match, AppError> {
        self.ensure_referee_available(&param, None).await?;

        let created = MatchRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| Self::map_write_error(e, INVALID_PAYLOAD))?;

        tracing::info!(
            "Created match {} in division {} for matchweek {}",
            created.id,
            created.division_id,
            created.matchweek
        );

        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(MATCH_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_all().await?)
    }

    /// Replaces a match, e.g. to enter its score or assign a referee.
    ///
    /// The match's own current booking is not counted as a conflict.
    pub async fn update(&self, id: i32, param: MatchParam) -> Result<Match, AppError> {
        let repo = MatchRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(MATCH_NOT_FOUND.to_string()));
        }

        self.ensure_referee_available(&param, Some(id)).await?;

        let updated = repo
            .update(id, param)
            .await
            .map_err(|e| Self::map_write_error(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(MATCH_NOT_FOUND.to_string()))?;

        tracing::info!("Updated match {}", id);

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = MatchRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, MATCH_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(MATCH_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn ensure_referee_available(
        &self,
        param: &MatchParam,
        exclude: Option<i32>,
    ) -> Result<(), AppError> {
        let Some(referee_id) = param.referee_id else {
            return Ok(());
        };

        let bookings = MatchRepository::new(self.db)
            .get_by_referee(referee_id)
            .await?;

        if let Some(conflict) = find_double_booking(&bookings, param.date, param.time, exclude) {
            tracing::warn!(
                "Referee {} already booked for match {} on {} at {}",
                referee_id,
                conflict.id,
                param.date,
                param.time
            );
            return Err(AppError::BadRequest(REFEREE_DOUBLE_BOOKED.to_string()));
        }

        Ok(())
    }

    /// A unique violation can only come from the referee slot index.
    fn map_write_error(err: sea_orm::DbErr, fallback: &str) -> AppError {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest(REFEREE_DOUBLE_BOOKED.to_string())
            }
            _ => AppError::from_constraint(err, fallback),
        }
    }
}
