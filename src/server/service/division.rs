use sea_orm::DatabaseConnection;

use crate::server::{
    data::{division::DivisionRepository, r#match::MatchRepository},
    error::{AppError, INVALID_INPUT_DATA, INVALID_PAYLOAD},
    model::division::{Division, DivisionParam},
};

pub const DIVISION_CREATED: &str = "Division successfully created!";
pub const DIVISION_NOT_FOUND: &str = "Division does not exist";
pub const DIVISION_UPDATED: &str = "Division updated.";
pub const DIVISION_DELETED: &str = "Division deleted";
pub const DIVISION_DELETE_FAILED: &str = "Failed to delete division";
pub const DIVISION_HAS_MATCHES: &str =
    "Failed to delete division: division still has existing matches";

pub struct DivisionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DivisionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: DivisionParam) -> Result<Division, AppError> {
        DivisionRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_PAYLOAD))
    }

    pub async fn get(&self, id: i32) -> Result<Division, AppError> {
        DivisionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DIVISION_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Division>, AppError> {
        Ok(DivisionRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, param: DivisionParam) -> Result<Division, AppError> {
        DivisionRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(DIVISION_NOT_FOUND.to_string()))
    }

    /// Deletes a division that no match refers to any more.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DivisionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(DIVISION_NOT_FOUND.to_string()));
        }

        let matches = MatchRepository::new(self.db).count_by_division(id).await?;
        if matches > 0 {
            tracing::warn!("Refused to delete division {} with {} matches", id, matches);
            return Err(AppError::BadRequest(DIVISION_HAS_MATCHES.to_string()));
        }

        let deleted = repo
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, DIVISION_HAS_MATCHES))?;

        if !deleted {
            return Err(AppError::BadRequest(DIVISION_DELETE_FAILED.to_string()));
        }

        Ok(())
    }
}
