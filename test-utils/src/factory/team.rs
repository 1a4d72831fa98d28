//! Team factory for creating test team entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams belonging to an existing club.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    stamnumber: i32,
    suffix: Option<String>,
    color: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory for the club with the given stamnumber.
    ///
    /// Defaults:
    /// - suffix: `None`
    /// - color: `"Blue"`
    pub fn new(db: &'a DatabaseConnection, stamnumber: i32) -> Self {
        Self {
            db,
            stamnumber,
            suffix: None,
            color: "Blue".to_string(),
        }
    }

    pub fn suffix(mut self, suffix: Option<&str>) -> Self {
        self.suffix = suffix.map(str::to_string);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            stamnumber: ActiveValue::Set(self.stamnumber),
            suffix: ActiveValue::Set(self.suffix),
            color: ActiveValue::Set(self.color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values for the given club.
pub async fn create_team(
    db: &DatabaseConnection,
    stamnumber: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, stamnumber).build().await
}
