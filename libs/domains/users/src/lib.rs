//! Users Domain
//!
//! Account registration and login. Passwords are stored as Argon2id PHC
//! strings; a successful register or login returns a signed bearer token.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_users::{SqliteUserRepository, UserService, handlers};
//!
//! let service = UserService::new(SqliteUserRepository::new(db.clone()));
//! let router = Router::new().nest("/auth", handlers::router(service, jwt_auth));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{EMAIL_ALREADY_REGISTERED, INVALID_CREDENTIALS, UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User, UserResponse};
pub use password::{hash_password, verify_password};
pub use repository::UserRepository;
pub use service::UserService;
pub use sqlite::SqliteUserRepository;
