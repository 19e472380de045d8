//! Product Service - catalog queries, CRUD and favorites

use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::catalog::PageRequest;
use crate::config::CatalogConfig;
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPage, ProductQuery};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    catalog: CatalogConfig,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: self.catalog,
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R, catalog: CatalogConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            catalog,
        }
    }

    /// One page of the catalog, annotated for `viewer`
    ///
    /// Anonymous viewers see `isFavorite: false` everywhere.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: ProductQuery,
        viewer: Option<i32>,
    ) -> ProductResult<ProductPage> {
        query.validate()?;
        let request = PageRequest::new(&query, &self.catalog);

        let total = self.repository.count(request.search.clone()).await?;

        let products = if request.offset() < total {
            self.repository
                .list_page(request.search.clone(), request.limit, request.offset())
                .await?
        } else {
            Vec::new()
        };

        let favorites: HashSet<i32> = match viewer {
            Some(user_id) if !products.is_empty() => {
                let ids = products.iter().map(|p| p.id).collect();
                self.repository
                    .favorite_product_ids(user_id, ids)
                    .await?
                    .into_iter()
                    .collect()
            }
            _ => HashSet::new(),
        };

        Ok(request.into_page(products, &favorites, total))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace a product's fields
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .replace(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product along with its favorite links
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Favorite a product; repeating it is a no-op
    #[instrument(skip(self))]
    pub async fn add_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<()> {
        self.ensure_exists(product_id).await?;

        if !self.repository.add_favorite(user_id, product_id).await? {
            tracing::debug!("Product already favorited");
        }
        Ok(())
    }

    /// Unfavorite a product; a missing link is a no-op
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, user_id: i32, product_id: i32) -> ProductResult<()> {
        self.ensure_exists(product_id).await?;

        if !self.repository.remove_favorite(user_id, product_id).await? {
            tracing::debug!("Product was not favorited");
        }
        Ok(())
    }

    async fn ensure_exists(&self, product_id: i32) -> ProductResult<()> {
        match self.repository.get_by_id(product_id).await? {
            Some(_) => Ok(()),
            None => Err(ProductError::NotFound(product_id)),
        }
    }
}
