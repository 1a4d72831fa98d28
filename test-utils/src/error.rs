use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("Test database was not initialized")]
    NotInitialized,
}
