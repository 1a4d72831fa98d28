//! Division factory for creating test division entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a division named `"Division {id}"`.
pub async fn create_division(db: &DatabaseConnection) -> Result<entity::division::Model, DbErr> {
    create_division_with_name(db, format!("Division {}", next_id())).await
}

/// Creates a division with the given name.
pub async fn create_division_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::division::Model, DbErr> {
    entity::division::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
