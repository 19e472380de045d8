//! Products Domain
//!
//! Catalog items, favorite links and the paged catalog query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, bearer-token gate
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, paging, favorite annotation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_products::{CatalogConfig, ProductService, SqliteProductRepository, handlers};
//!
//! let repository = SqliteProductRepository::new(db.clone());
//! let service = ProductService::new(repository, CatalogConfig::default());
//! let router = Router::new().nest("/products", handlers::router(service, jwt_auth));
//! ```

pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use config::CatalogConfig;
pub use error::{PRODUCT_NOT_FOUND, ProductError, ProductResult};
pub use handlers::{ADDED_TO_FAVORITES, ApiDoc, REMOVED_FROM_FAVORITES};
pub use models::{
    MessageResponse, Pagination, Product, ProductInput, ProductListItem, ProductPage, ProductQuery,
};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use sqlite::SqliteProductRepository;
