use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse, ConfigError, FromEnv};

/// Database file used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://marketplace.db?mode=rwc";

/// SQLite connection pool configuration
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("sqlite://marketplace.db?mode=rwc");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// How long a request waits for a pooled connection before giving up
    pub acquire_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,

    /// SQL logging level
    pub sqlx_logging_level: LevelFilter,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// A private in-memory database.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own empty
    /// database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        }
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }

    /// Get a reference to the database URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (default: `sqlite://marketplace.db?mode=rwc`)
/// - `DB_MAX_CONNECTIONS` (default: 5)
/// - `DB_MIN_CONNECTIONS` (default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_SQLX_LOGGING` (default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL);
        let max_connections: u32 = env_parse("DB_MAX_CONNECTIONS", "5")?;
        let min_connections: u32 = env_parse("DB_MIN_CONNECTIONS", "1")?;

        if min_connections > max_connections {
            return Err(ConfigError::ParseError {
                key: "DB_MIN_CONNECTIONS".to_string(),
                details: format!(
                    "must not exceed DB_MAX_CONNECTIONS ({} > {})",
                    min_connections, max_connections
                ),
            });
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "false")?,
            sqlx_logging_level: LevelFilter::Debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_config_new_keeps_pool_defaults() {
        let config = SqliteConfig::new("sqlite://test.db?mode=rwc");
        assert_eq!(config.url(), "sqlite://test.db?mode=rwc");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_sqlite_config_in_memory_uses_single_connection() {
        let config = SqliteConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_sqlite_config_with_pool_size() {
        let config = SqliteConfig::default().with_pool_size(10, 2);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("DB_MAX_CONNECTIONS", None),
                ("DB_MIN_CONNECTIONS", None),
            ],
            || {
                let config = SqliteConfig::from_env().unwrap();
                assert_eq!(config.url, DEFAULT_DATABASE_URL);
                assert_eq!(config.max_connections, 5);
                assert!(!config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite:///var/lib/marketplace.db?mode=rwc")),
                ("DB_MAX_CONNECTIONS", Some("8")),
                ("DB_ACQUIRE_TIMEOUT_SECS", Some("2")),
                ("DB_SQLX_LOGGING", Some("true")),
            ],
            || {
                let config = SqliteConfig::from_env().unwrap();
                assert_eq!(config.url, "sqlite:///var/lib/marketplace.db?mode=rwc");
                assert_eq!(config.max_connections, 8);
                assert_eq!(config.acquire_timeout_secs, 2);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_invalid_number() {
        temp_env::with_var("DB_MAX_CONNECTIONS", Some("invalid"), || {
            let err = SqliteConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_rejects_min_above_max() {
        temp_env::with_vars(
            [("DB_MAX_CONNECTIONS", Some("2")), ("DB_MIN_CONNECTIONS", Some("3"))],
            || {
                let err = SqliteConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MIN_CONNECTIONS"));
            },
        );
    }
}
