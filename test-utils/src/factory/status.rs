//! Status factory for creating test status entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a status named `"Scheduled"`.
pub async fn create_status(db: &DatabaseConnection) -> Result<entity::status::Model, DbErr> {
    create_status_with_name(db, "Scheduled").await
}

/// Creates a status with the given name.
pub async fn create_status_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::status::Model, DbErr> {
    entity::status::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
