use sea_orm::DatabaseConnection;

use crate::server::{
    data::status::StatusRepository,
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::status::{Status, StatusParam},
};

pub const STATUS_CREATED: &str = "Status successfully created!";
pub const STATUS_NOT_FOUND: &str = "Status does not exist";
pub const STATUS_UPDATED: &str = "Status updated.";
pub const STATUS_DELETED: &str = "Status deleted";
pub const STATUS_DELETE_FAILED: &str = "Failed to delete status";

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: StatusParam) -> Result<Status, AppError> {
        StatusRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_PAYLOAD))
    }

    pub async fn get(&self, id: i32) -> Result<Status, AppError> {
        StatusRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(STATUS_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Status>, AppError> {
        Ok(StatusRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, param: StatusParam) -> Result<Status, AppError> {
        StatusRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(STATUS_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = StatusRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, STATUS_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(STATUS_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
