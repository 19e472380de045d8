//! Configuration for the Marketplace API

use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::common::RetryConfig;
use database::sqlite::SqliteConfig;
use domain_products::CatalogConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database: SqliteConfig,
    pub retry: RetryConfig,
    pub jwt: JwtConfig,
    pub catalog: CatalogConfig,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            database: SqliteConfig::from_env()?,
            retry: RetryConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            cors: CorsConfig::from_env()?,
        })
    }
}
