use axum::Router;
use domain_users::{SqliteUserRepository, UserService, handlers};

use crate::state::AppState;

/// Registration and login at `/auth`
pub fn router(state: &AppState) -> Router {
    let repository = SqliteUserRepository::new(state.db.clone());
    let service = UserService::new(repository);
    handlers::router(service, state.jwt_auth.clone())
}
