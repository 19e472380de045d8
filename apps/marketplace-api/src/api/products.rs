use axum::Router;
use domain_products::{ProductService, SqliteProductRepository, handlers};

use crate::state::AppState;

/// Catalog, product management and favorites at `/products`
pub fn router(state: &AppState) -> Router {
    let repository = SqliteProductRepository::new(state.db.clone());
    let service = ProductService::new(repository, state.config.catalog);
    handlers::router(service, state.jwt_auth.clone())
}
