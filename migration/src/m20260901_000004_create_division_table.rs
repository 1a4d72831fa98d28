use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Division::Table)
                    .if_not_exists()
                    .col(pk_auto(Division::Id))
                    .col(string_len(Division::Name, 128))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Division::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Division {
    #[sea_orm(iden = "divisions")]
    Table,
    Id,
    Name,
}
