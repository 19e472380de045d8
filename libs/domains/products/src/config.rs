use core_config::{ConfigError, FromEnv, env_parse};

pub const DEFAULT_PAGE_SIZE: u64 = 6;
pub const MAX_PAGE_SIZE: u64 = 50;

/// Catalog paging limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Page size when the request gives no `limit`
    pub default_page_size: u64,
    /// Larger requested limits are clamped to this
    pub max_page_size: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Load CatalogConfig from environment variables
///
/// - `CATALOG_DEFAULT_PAGE_SIZE` (default: 6)
/// - `CATALOG_MAX_PAGE_SIZE` (default: 50)
impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_page_size: u64 = env_parse("CATALOG_DEFAULT_PAGE_SIZE", "6")?;
        let max_page_size: u64 = env_parse("CATALOG_MAX_PAGE_SIZE", "50")?;

        if max_page_size == 0 {
            return Err(ConfigError::ParseError {
                key: "CATALOG_MAX_PAGE_SIZE".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        if default_page_size == 0 || default_page_size > max_page_size {
            return Err(ConfigError::ParseError {
                key: "CATALOG_DEFAULT_PAGE_SIZE".to_string(),
                details: format!("must be between 1 and {}", max_page_size),
            });
        }

        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }
}
