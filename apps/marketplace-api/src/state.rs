//! Application state management

use axum_helpers::JwtAuth;
use database::sqlite::DatabaseConnection;

use crate::config::Config;

/// Shared application state
///
/// Cloned into the readiness router and read once when the domain routers
/// are built. The connection pool and signing keys are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
    pub jwt_auth: JwtAuth,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        let jwt_auth = JwtAuth::new(&config.jwt);
        Self {
            config,
            db,
            jwt_auth,
        }
    }
}
