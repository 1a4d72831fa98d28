use sea_orm::DatabaseConnection;

use crate::server::{
    data::club::ClubRepository,
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::club::{Club, ClubParam},
};

pub const CLUB_CREATED: &str = "Club successfully created!";
pub const CLUB_NOT_FOUND: &str = "Club does not exist";
pub const CLUB_UPDATED: &str = "Club updated.";
pub const CLUB_DELETED: &str = "Club deleted";
pub const CLUB_DELETE_FAILED: &str = "Failed to delete club";

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a club; a stamnumber that is already registered is rejected.
    pub async fn create(&self, param: ClubParam) -> Result<Club, AppError> {
        let club = ClubRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_PAYLOAD))?;

        tracing::info!("Created club {}", club.stamnumber);

        Ok(club)
    }

    pub async fn get(&self, stamnumber: i32) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_stamnumber(stamnumber)
            .await?
            .ok_or_else(|| AppError::NotFound(CLUB_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        Ok(ClubRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, stamnumber: i32, param: ClubParam) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .update(stamnumber, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(CLUB_NOT_FOUND.to_string()))
    }

    /// Deletes a club together with its teams.
    pub async fn delete(&self, stamnumber: i32) -> Result<(), AppError> {
        let deleted = ClubRepository::new(self.db)
            .delete(stamnumber)
            .await
            .map_err(|e| AppError::from_constraint(e, CLUB_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(CLUB_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted club {} and its teams", stamnumber);

        Ok(())
    }
}
