use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username).unique_key())
                    .col(string(Users::PasswordHash))
                    .to_owned(),
            )
            .await?;

        // Create inventory table; the product id is a caller-supplied
        // string key, so no autoincrement column here.
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(string(Inventory::ProductId).primary_key())
                    .col(string(Inventory::ProductName))
                    .col(big_integer(Inventory::Quantity))
                    .col(string(Inventory::ArrivalDate))
                    .col(string(Inventory::Source))
                    .col(string(Inventory::BoxId))
                    .col(double(Inventory::UnitPrice))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    ProductId,
    ProductName,
    Quantity,
    ArrivalDate,
    Source,
    BoxId,
    UnitPrice,
}
