use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables of a test store, then creates them with `build()`.
///
/// Tables are created in the order they were added, so referenced tables go first.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of `entity`, generated with SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Users service store.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Teams service store: clubs and the teams they field.
    pub fn with_team_tables(self) -> Self {
        self.with_table(Club).with_table(Team)
    }

    /// Matches service store. Matches reference the other three tables.
    pub fn with_match_tables(self) -> Self {
        self.with_table(Division)
            .with_table(Status)
            .with_table(Referee)
            .with_table(Match)
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
