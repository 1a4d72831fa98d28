//! Referee factory for creating test referee entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test referees with customizable fields.
pub struct RefereeFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
}

impl<'a> RefereeFactory<'a> {
    /// Creates a new RefereeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Referee"`
    /// - last_name: `"{id}"`
    /// - email: `"referee_{id}@league.test"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Referee".to_string(),
            last_name: id.to_string(),
            email: format!("referee_{}@league.test", id),
        }
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the referee entity into the database.
    pub async fn build(self) -> Result<entity::referee::Model, DbErr> {
        entity::referee::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address: ActiveValue::Set("Kerkstraat 12".to_string()),
            zip_code: ActiveValue::Set(2000),
            city: ActiveValue::Set("Antwerpen".to_string()),
            phone_number: ActiveValue::Set("0470123456".to_string()),
            email: ActiveValue::Set(self.email),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1980, 5, 17).unwrap_or_default()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a referee with default values.
pub async fn create_referee(db: &DatabaseConnection) -> Result<entity::referee::Model, DbErr> {
    RefereeFactory::new(db).build().await
}
