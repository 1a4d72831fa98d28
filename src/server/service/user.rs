use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{AppError, INVALID_INPUT_DATA},
    model::user::{User, UserParam},
};

pub const USER_NOT_FOUND: &str = "User does not exist";
pub const USER_UPDATED: &str = "User updated.";
pub const USER_DELETED: &str = "User deleted";
pub const USER_DELETE_FAILED: &str = "Failed to delete user";
pub const EMAIL_TAKEN: &str = "Sorry. That email already exists.";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user, rejecting an email that is already in use.
    pub async fn create(&self, param: UserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            tracing::debug!("Rejected user with existing email {}", param.email);
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let user = repo
            .create(param)
            .await
            .map_err(|e| AppError::from_constraint(e, EMAIL_TAKEN))?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Replaces a user. The email may only collide with the user's own current email.
    pub async fn update(&self, id: i32, param: UserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if let Some(owner) = repo.find_by_email(&param.email).await? {
            if owner.id != id {
                return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
            }
        }

        repo.update(id, param)
            .await
            .map_err(|e| AppError::from_constraint(e, INVALID_INPUT_DATA))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_constraint(e, USER_DELETE_FAILED))?;

        if !deleted {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
