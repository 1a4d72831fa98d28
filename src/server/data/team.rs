//! Team data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::team::{Team, TeamParam};

/// Repository providing database operations for team management.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team. The referenced club must exist.
    pub async fn create(&self, param: TeamParam) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            stamnumber: ActiveValue::Set(param.stamnumber),
            suffix: ActiveValue::Set(param.suffix),
            color: ActiveValue::Set(param.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets all teams ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Gets the teams of one club ordered by ID.
    pub async fn get_by_stamnumber(&self, stamnumber: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Stamnumber.eq(stamnumber))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Replaces every field of an existing team.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The updated team
    /// - `Ok(None)` - No team with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: TeamParam) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = existing.into();
        active.stamnumber = ActiveValue::Set(param.stamnumber);
        active.suffix = ActiveValue::Set(param.suffix);
        active.color = ActiveValue::Set(param.color);

        let entity = active.update(self.db).await?;

        Ok(Some(Team::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
