use axum::Router;

pub mod auth;
pub mod health;
pub mod products;

use crate::state::AppState;

/// Creates the API routes.
///
/// Returns a stateless Router: each domain router already has its service
/// state applied, so only pool and key clones happen here.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state))
        .nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// It carries its own state and merges with the stateless app router
/// returned by `create_router`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
