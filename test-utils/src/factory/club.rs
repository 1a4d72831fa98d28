//! Club factory for creating test club entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test clubs with customizable fields.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    stamnumber: i32,
    name: String,
    website: Option<String>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - stamnumber: unique counter value
    /// - name: `"Club {stamnumber}"`
    /// - website: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let stamnumber = next_id() as i32;
        Self {
            db,
            stamnumber,
            name: format!("Club {}", stamnumber),
            website: None,
        }
    }

    pub fn stamnumber(mut self, stamnumber: i32) -> Self {
        self.stamnumber = stamnumber;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn website(mut self, website: Option<&str>) -> Self {
        self.website = website.map(str::to_string);
        self
    }

    /// Builds and inserts the club entity into the database.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            stamnumber: ActiveValue::Set(self.stamnumber),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set("Stadionstraat 1".to_string()),
            zipcode: ActiveValue::Set(9000),
            city: ActiveValue::Set("Gent".to_string()),
            website: ActiveValue::Set(self.website),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
