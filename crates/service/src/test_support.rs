#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, in_memory_config};

/// Fresh migrated in-memory database; each test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&in_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
