//! Marketplace API
//!
//! Composes the users and products domains into one HTTP service over a
//! SQLite store.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::health_router;

pub use config::Config;
pub use state::AppState;

/// The complete application router: API routes, documentation UIs,
/// `/health` and `/ready`.
pub fn app(state: &AppState) -> Router {
    let api_routes = api::routes(state);

    axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()))
}
