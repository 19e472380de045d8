//! HTTP middleware module.
//!
//! - CORS configuration loaded from the environment
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{CorsConfig, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(CorsConfig::from_env()?.layer());
//! ```

pub mod cors;
pub mod security;

pub use cors::{CorsConfig, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
