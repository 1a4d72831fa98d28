use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Referee::Table)
                    .if_not_exists()
                    .col(pk_auto(Referee::Id))
                    .col(string_len(Referee::FirstName, 128))
                    .col(string_len(Referee::LastName, 128))
                    .col(string_len(Referee::Address, 128))
                    .col(integer(Referee::ZipCode))
                    .col(string_len(Referee::City, 128))
                    .col(string_len(Referee::PhoneNumber, 128))
                    .col(string_len(Referee::Email, 128))
                    .col(date(Referee::BirthDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Referee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Referee {
    #[sea_orm(iden = "referees")]
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    ZipCode,
    City,
    PhoneNumber,
    Email,
    BirthDate,
}
