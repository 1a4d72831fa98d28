//! Match status data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::status::{Status, StatusParam};

pub struct StatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: StatusParam) -> Result<Status, DbErr> {
        let entity = entity::status::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Status::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Status::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Status>, DbErr> {
        let entities = entity::prelude::Status::find()
            .order_by_asc(entity::status::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Status::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: StatusParam) -> Result<Option<Status>, DbErr> {
        let Some(existing) = entity::prelude::Status::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::status::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);

        let entity = active.update(self.db).await?;

        Ok(Some(Status::from_entity(entity)))
    }

    /// Deletes a status. Matches carrying it lose their status.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Status::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
