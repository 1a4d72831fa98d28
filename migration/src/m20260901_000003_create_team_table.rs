use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::Stamnumber))
                    .col(string_len_null(Team::Suffix, 128))
                    .col(string_len(Team::Color, 128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_stamnumber")
                            .from(Team::Table, Team::Stamnumber)
                            .to(Club::Table, Club::Stamnumber)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Stamnumber,
    Suffix,
    Color,
}
