pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_club_table;
mod m20260901_000003_create_team_table;
mod m20260901_000004_create_division_table;
mod m20260901_000005_create_status_table;
mod m20260901_000006_create_referee_table;
mod m20260901_000007_create_match_table;
mod m20260901_000008_create_match_referee_slot_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_club_table::Migration),
            Box::new(m20260901_000003_create_team_table::Migration),
            Box::new(m20260901_000004_create_division_table::Migration),
            Box::new(m20260901_000005_create_status_table::Migration),
            Box::new(m20260901_000006_create_referee_table::Migration),
            Box::new(m20260901_000007_create_match_table::Migration),
            Box::new(m20260901_000008_create_match_referee_slot_index::Migration),
        ]
    }
}
