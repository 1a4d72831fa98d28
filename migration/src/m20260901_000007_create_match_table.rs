use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000004_create_division_table::Division,
    m20260901_000005_create_status_table::Status,
    m20260901_000006_create_referee_table::Referee,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(pk_auto(Match::Id))
                    .col(integer(Match::DivisionId))
                    .col(integer(Match::Matchweek))
                    .col(date(Match::Date))
                    .col(time(Match::Time))
                    .col(integer(Match::HomeTeamId))
                    .col(integer(Match::AwayTeamId))
                    .col(integer_null(Match::GoalsHomeTeam))
                    .col(integer_null(Match::GoalsAwayTeam))
                    .col(integer_null(Match::StatusId))
                    .col(integer_null(Match::RefereeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_division_id")
                            .from(Match::Table, Match::DivisionId)
                            .to(Division::Table, Division::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_status_id")
                            .from(Match::Table, Match::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_referee_id")
                            .from(Match::Table, Match::RefereeId)
                            .to(Referee::Table, Referee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    DivisionId,
    Matchweek,
    Date,
    Time,
    HomeTeamId,
    AwayTeamId,
    GoalsHomeTeam,
    GoalsAwayTeam,
    StatusId,
    RefereeId,
}
