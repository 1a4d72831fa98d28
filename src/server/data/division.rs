//! Division data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::division::{Division, DivisionParam};

pub struct DivisionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DivisionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: DivisionParam) -> Result<Division, DbErr> {
        let entity = entity::division::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Division::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Division>, DbErr> {
        let entity = entity::prelude::Division::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Division::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Division>, DbErr> {
        let entities = entity::prelude::Division::find()
            .order_by_asc(entity::division::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Division::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: DivisionParam) -> Result<Option<Division>, DbErr> {
        let Some(existing) = entity::prelude::Division::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::division::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);

        let entity = active.update(self.db).await?;

        Ok(Some(Division::from_entity(entity)))
    }

    /// Deletes a division. Fails with a constraint error while matches still reference it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Division::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
