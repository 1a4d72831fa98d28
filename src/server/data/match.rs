//! Match data repository for database operations.
//!
//! Provides the `MatchRepository` for managing matches in the database, plus the lookups
//! used to enforce referee availability and division deletion rules.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::r#match::{Match, MatchParam};

/// Repository providing database operations for match management.
pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    /// Creates a new MatchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MatchRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new match.
    ///
    /// # Arguments
    /// - `param` - Match fields to store
    ///
    /// # Returns
    /// - `Ok(Match)` - The created match
    /// - `Err(DbErr)` - Database error during insert, e.g. an unknown division
    pub async fn create(&self, param: MatchParam) -> Result<Match, DbErr> {
        let entity = entity::r#match::ActiveModel {
            division_id: ActiveValue::Set(param.division_id),
            matchweek: ActiveValue::Set(param.matchweek),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            home_team_id: ActiveValue::Set(param.home_team_id),
            away_team_id: ActiveValue::Set(param.away_team_id),
            goals_home_team: ActiveValue::Set(param.goals_home_team),
            goals_away_team: ActiveValue::Set(param.goals_away_team),
            status_id: ActiveValue::Set(param.status_id),
            referee_id: ActiveValue::Set(param.referee_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Match::from_entity(entity))
    }

    /// Finds a match by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Match))` - Match found
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        let entity = entity::prelude::Match::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Match::from_entity))
    }

    /// Gets all matches ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Match>, DbErr> {
        let entities = entity::prelude::Match::find()
            .order_by_asc(entity::r#match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Gets every match the referee is assigned to.
    ///
    /// # Arguments
    /// - `referee_id` - ID of the referee
    ///
    /// # Returns
    /// - `Ok(Vec<Match>)` - The referee's bookings, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_referee(&self, referee_id: i32) -> Result<Vec<Match>, DbErr> {
        let entities = entity::prelude::Match::find()
            .filter(entity::r#match::Column::RefereeId.eq(referee_id))
            .order_by_asc(entity::r#match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Counts the matches scheduled in a division.
    pub async fn count_by_division(&self, division_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Match::find()
            .filter(entity::r#match::Column::DivisionId.eq(division_id))
            .count(self.db)
            .await
    }

    /// Replaces every field of an existing match.
    ///
    /// # Returns
    /// - `Ok(Some(Match))` - The updated match
    /// - `Ok(None)` - No match with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: MatchParam) -> Result<Option<Match>, DbErr> {
        let Some(existing) = entity::prelude::Match::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::r#match::ActiveModel = existing.into();
        active.division_id = ActiveValue::Set(param.division_id);
        active.matchweek = ActiveValue::Set(param.matchweek);
        active.date = ActiveValue::Set(param.date);
        active.time = ActiveValue::Set(param.time);
        active.home_team_id = ActiveValue::Set(param.home_team_id);
        active.away_team_id = ActiveValue::Set(param.away_team_id);
        active.goals_home_team = ActiveValue::Set(param.goals_home_team);
        active.goals_away_team = ActiveValue::Set(param.goals_away_team);
        active.status_id = ActiveValue::Set(param.status_id);
        active.referee_id = ActiveValue::Set(param.referee_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Match::from_entity(entity)))
    }

    /// Deletes the match with the provided ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The match was deleted
    /// - `Ok(false)` - No match with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Match::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
