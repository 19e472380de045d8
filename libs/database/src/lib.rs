//! Database connectivity for the marketplace services
//!
//! Wraps SeaORM's SQLite driver with pool configuration, retrying connects,
//! migration running and a readiness check.
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - `core_config::FromEnv` impls for [`sqlite::SqliteConfig`] and
//!   [`common::RetryConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://marketplace.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "marketplace_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
