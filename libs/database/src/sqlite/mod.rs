//! SQLite connector and utilities
//!
//! Connection pooling, startup retries, migrations and the readiness probe.

mod config;
mod connector;
mod health;

pub use config::{SqliteConfig, DEFAULT_DATABASE_URL};
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::{check_health, check_health_with_query};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
