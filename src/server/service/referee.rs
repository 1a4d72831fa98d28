use sea_orm::DatabaseConnection;

use crate::server::{
    data::referee::RefereeRepository,
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::referee::{Referee, RefereeParam},
};

pub const REFEREE_CREATED: &str = "Referee successfully created!";
pub const REFEREE_NOT_FOUND: &str = "Referee does not exist";
pub const REFEREE_UPDATED: &str = "Referee updated.";
pub const REFEREE_DELETED: &str = "Referee deleted";
pub const REFEREE_DELETE_FAILED: &str = "Failed to delete referee";

pub struct RefereeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefereeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: RefereeParam) -> Result<Referee, AppError> {
        RefereeRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_PAYLOAD))
    }

    pub async fn get(&self, id: i32) -> Result<Referee, AppError> {
        RefereeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(REFEREE_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Referee>, AppError> {
        Ok(RefereeRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, param: RefereeParam) -> Result<Referee, AppError> {
        RefereeRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(REFEREE_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = RefereeRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, REFEREE_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(REFEREE_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
