use crate::{error::ServiceResult, services::seed::SeedService};
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging_level(log::LevelFilter::Debug);

    // Every pooled connection to an in-memory SQLite database is a separate database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Applies pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    info!("Database schema is up to date");
    Ok(())
}

/// Applies pending migrations and creates any missing seed accounts.
///
/// Returns the usernames of the seed accounts that were created.
pub async fn init_schema(db: &DatabaseConnection) -> ServiceResult<Vec<&'static str>> {
    migrate(db).await?;
    SeedService::ensure_seed_accounts(db).await
}
