//! Migrator for the single `phone` table.
pub use sea_orm_migration::prelude::*;

mod m20241126_000001_create_phone;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241126_000001_create_phone::Migration)]
    }
}
