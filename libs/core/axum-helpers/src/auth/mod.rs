//! Authentication and authorization module.
//!
//! - Stateless HS256 token issuing and verification ([`JwtAuth`])
//! - Middleware that guards protected routes, and an optional variant that
//!   only identifies the caller
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/products", post(create_product))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::{DEFAULT_TOKEN_TTL_SECS, DEV_JWT_SECRET, JwtConfig};
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{
    INVALID_TOKEN, MISSING_TOKEN, jwt_auth_middleware, optional_jwt_auth_middleware,
};
