//! Referee data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::referee::{Referee, RefereeParam};

pub struct RefereeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefereeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: RefereeParam) -> Result<Referee, DbErr> {
        let entity = entity::referee::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            address: ActiveValue::Set(param.address),
            zip_code: ActiveValue::Set(param.zip_code),
            city: ActiveValue::Set(param.city),
            phone_number: ActiveValue::Set(param.phone_number),
            email: ActiveValue::Set(param.email),
            birth_date: ActiveValue::Set(param.birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Referee::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Referee>, DbErr> {
        let entity = entity::prelude::Referee::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Referee::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Referee>, DbErr> {
        let entities = entity::prelude::Referee::find()
            .order_by_asc(entity::referee::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referee::from_entity).collect())
    }

    /// Replaces every field of an existing referee, returning `None` if it does not exist.
    pub async fn update(&self, id: i32, param: RefereeParam) -> Result<Option<Referee>, DbErr> {
        let Some(existing) = entity::prelude::Referee::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::referee::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        active.address = ActiveValue::Set(param.address);
        active.zip_code = ActiveValue::Set(param.zip_code);
        active.city = ActiveValue::Set(param.city);
        active.phone_number = ActiveValue::Set(param.phone_number);
        active.email = ActiveValue::Set(param.email);
        active.birth_date = ActiveValue::Set(param.birth_date);

        let entity = active.update(self.db).await?;

        Ok(Some(Referee::from_entity(entity)))
    }

    /// Deletes a referee. Matches they were assigned to lose their referee.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Referee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
