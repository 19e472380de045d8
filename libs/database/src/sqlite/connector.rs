use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Connect to a SQLite database with the default pool settings.
///
/// # Example
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect("sqlite://marketplace.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(database_url)).await
}

/// Connect using a SqliteConfig
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to SQLite database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff on failure.
///
/// `None` uses the default [`RetryConfig`] (3 retries, 100ms initial delay).
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = SqliteConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(5))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff(attempt, retry_config).await,
        None => retry(attempt).await,
    }
}

/// Run database migrations using the provided Migrator
///
/// Migrations create their tables and indexes only when missing, so this is
/// safe to call on every startup.
///
/// # Example
/// ```ignore
/// use migration::Migrator;
/// use database::sqlite::run_migrations;
///
/// run_migrations::<Migrator>(&db, "marketplace_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
