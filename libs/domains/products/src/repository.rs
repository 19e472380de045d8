use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for catalog items and favorite links
///
/// `search` arguments are already trimmed; `None` matches every product.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Replace title, price, description and image; `None` if no such product
    async fn replace(&self, id: i32, input: ProductInput) -> ProductResult<Option<Product>>;

    /// Delete a product and its favorite links; `false` if no such product
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Count products matching `search`
    async fn count(&self, search: Option<String>) -> ProductResult<u64>;

    /// One window of matching products, newest (`id DESC`) first
    async fn list_page(
        &self,
        search: Option<String>,
        limit: u64,
        offset: u64,
    ) -> ProductResult<Vec<Product>>;

    /// The subset of `product_ids` that `user_id` has favorited
    async fn favorite_product_ids(
        &self,
        user_id: i32,
        product_ids: Vec<i32>,
    ) -> ProductResult<Vec<i32>>;

    /// Insert a favorite link if absent; `true` when a row was added
    async fn add_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<bool>;

    /// Remove a favorite link; `true` when a row was removed
    async fn remove_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<bool>;
}
