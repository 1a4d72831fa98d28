use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(integer(Club::Stamnumber).primary_key())
                    .col(string_len(Club::Name, 128))
                    .col(string_len(Club::Address, 128))
                    .col(integer(Club::Zipcode))
                    .col(string_len(Club::City, 128))
                    .col(string_len_null(Club::Website, 128))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    #[sea_orm(iden = "clubs")]
    Table,
    Stamnumber,
    Name,
    Address,
    Zipcode,
    City,
    Website,
}
