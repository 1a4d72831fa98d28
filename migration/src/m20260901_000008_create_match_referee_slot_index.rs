use sea_orm_migration::prelude::*;

use super::m20260901_000007_create_match_table::Match;

const INDEX_NAME: &str = "idx_match_referee_slot";

/// A referee can only be booked once per date and time. Rows without a referee
/// are not constrained since NULLs never compare equal in a unique index.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Match::Table)
                    .col(Match::Date)
                    .col(Match::Time)
                    .col(Match::RefereeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Match::Table).to_owned())
            .await
    }
}
