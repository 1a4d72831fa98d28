//! Club data repository for database operations.
//!
//! Clubs are keyed by stamnumber. Teams reference that key, so deleting or renumbering a
//! club also deletes or renumbers its teams within the same transaction.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::club::{Club, ClubParam};

/// Repository providing database operations for club management.
pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    /// Creates a new ClubRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClubRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new club under the stamnumber given in `param`.
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club
    /// - `Err(DbErr)` - Database error during insert, including a duplicate stamnumber
    pub async fn create(&self, param: ClubParam) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            stamnumber: ActiveValue::Set(param.stamnumber),
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            zipcode: ActiveValue::Set(param.zipcode),
            city: ActiveValue::Set(param.city),
            website: ActiveValue::Set(param.website),
        }
        .insert(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }

    /// Finds a club by stamnumber.
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - Club found
    /// - `Ok(None)` - No club with that stamnumber
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_stamnumber(&self, stamnumber: i32) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find_by_id(stamnumber)
            .one(self.db)
            .await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Gets all clubs ordered by stamnumber.
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Stamnumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Replaces every field of an existing club, including its stamnumber.
    ///
    /// When the stamnumber changes, teams of the club are moved to the new stamnumber.
    ///
    /// # Arguments
    /// - `stamnumber` - Current stamnumber of the club
    /// - `param` - New club fields
    ///
    /// # Returns
    /// - `Ok(Some(Club))` - The updated club
    /// - `Ok(None)` - No club with that stamnumber
    /// - `Err(DbErr)` - Database error during update, e.g. the new stamnumber is taken
    pub async fn update(&self, stamnumber: i32, param: ClubParam) -> Result<Option<Club>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Club::update_many()
            .col_expr(entity::club::Column::Stamnumber, Expr::value(param.stamnumber))
            .col_expr(entity::club::Column::Name, Expr::value(param.name))
            .col_expr(entity::club::Column::Address, Expr::value(param.address))
            .col_expr(entity::club::Column::Zipcode, Expr::value(param.zipcode))
            .col_expr(entity::club::Column::City, Expr::value(param.city))
            .col_expr(entity::club::Column::Website, Expr::value(param.website))
            .filter(entity::club::Column::Stamnumber.eq(stamnumber))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        // No-op when the foreign key already cascaded the new stamnumber
        if param.stamnumber != stamnumber {
            entity::prelude::Team::update_many()
                .col_expr(entity::team::Column::Stamnumber, Expr::value(param.stamnumber))
                .filter(entity::team::Column::Stamnumber.eq(stamnumber))
                .exec(&txn)
                .await?;
        }

        let entity = entity::prelude::Club::find_by_id(param.stamnumber)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Deletes the club with the provided stamnumber along with its teams.
    ///
    /// # Returns
    /// - `Ok(true)` - The club was deleted
    /// - `Ok(false)` - No club with that stamnumber
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, stamnumber: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Team::delete_many()
            .filter(entity::team::Column::Stamnumber.eq(stamnumber))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Club::delete_by_id(stamnumber)
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
