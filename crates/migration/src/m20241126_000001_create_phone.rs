//! Create `phone` table.
//!
//! Identity is an auto-incrementing 64-bit integer assigned by the store on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phone::Table)
                    .if_not_exists()
                    .col(big_integer(Phone::Id).auto_increment().primary_key().take())
                    .col(string_len(Phone::Brand, 256).not_null())
                    .col(string_len(Phone::Model, 256).not_null())
                    .col(double(Phone::Price).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Phone::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Phone { Table, Id, Brand, Model, Price }
