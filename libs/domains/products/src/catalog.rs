//! Catalog paging and favorite annotation
//!
//! Pure helpers driven by `ProductService::list_products`: they turn a
//! validated [`ProductQuery`] into a concrete page window and shape the
//! repository results into a [`ProductPage`].

use std::collections::HashSet;

use crate::config::CatalogConfig;
use crate::models::{Pagination, Product, ProductListItem, ProductPage, ProductQuery};

/// A normalized page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Trimmed search term; `None` means no filter
    pub search: Option<String>,
    /// 1-based
    pub page: u64,
    /// Effective page size, within `1..=max_page_size`
    pub limit: u64,
}

impl PageRequest {
    /// Apply defaults and clamping to a query that already passed validation.
    pub fn new(query: &ProductQuery, config: &CatalogConfig) -> Self {
        let page = query.page.map_or(1, |page| page.max(1) as u64);
        let limit = query
            .limit
            .map_or(config.default_page_size, |limit| limit.max(1) as u64)
            .min(config.max_page_size);

        Self {
            search: normalize_search(query.search.as_deref()),
            page,
            limit,
        }
    }

    /// Rows to skip: `(page - 1) * limit`, capped at SQLite's `i64::MAX`
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: total_pages(total, self.limit),
        }
    }

    /// Build the page from one window of products and the viewer's favorites
    pub fn into_page(
        self,
        products: Vec<Product>,
        favorites: &HashSet<i32>,
        total: u64,
    ) -> ProductPage {
        ProductPage {
            data: annotate(products, favorites),
            pagination: self.pagination(total),
        }
    }
}

/// Trim the search term; blank means no filter
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// `ceil(total / limit)`, 0 for an empty catalog
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Mark each product the viewer has favorited
pub fn annotate(products: Vec<Product>, favorites: &HashSet<i32>) -> Vec<ProductListItem> {
    products
        .into_iter()
        .map(|product| ProductListItem {
            is_favorite: favorites.contains(&product.id),
            product,
        })
        .collect()
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'`
/// substring pattern.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn query(search: Option<&str>, page: Option<i64>, limit: Option<i64>) -> ProductQuery {
        ProductQuery {
            search: search.map(str::to_string),
            page,
            limit,
        }
    }

    fn product(id: i32) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            price: 1.0,
            description: "Test item".to_string(),
            image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_defaults() {
        let request = PageRequest::new(&query(None, None, None), &CatalogConfig::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 6);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.search, None);
    }

    #[test]
    fn test_limit_is_clamped_to_max() {
        let request = PageRequest::new(&query(None, Some(2), Some(500)), &CatalogConfig::default());
        assert_eq!(request.limit, 50);
        assert_eq!(request.offset(), 50);
    }

    #[test]
    fn test_offset_for_later_pages() {
        let request = PageRequest::new(&query(None, Some(3), Some(4)), &CatalogConfig::default());
        assert_eq!(request.offset(), 8);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let request = PageRequest::new(
            &query(None, Some(i64::MAX), Some(50)),
            &CatalogConfig::default(),
        );
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_search_is_trimmed() {
        assert_eq!(normalize_search(Some("  mug ")), Some("mug".to_string()));
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(None), None);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_annotate_marks_only_favorites() {
        let favorites: HashSet<i32> = [2].into_iter().collect();
        let items = annotate(vec![product(3), product(2), product(1)], &favorites);

        let flags: Vec<(i32, bool)> = items
            .iter()
            .map(|item| (item.product.id, item.is_favorite))
            .collect();
        assert_eq!(flags, vec![(3, false), (2, true), (1, false)]);
    }

    #[test]
    fn test_page_beyond_last_keeps_totals() {
        let request = PageRequest::new(&query(None, Some(99), None), &CatalogConfig::default());
        let page = request.into_page(vec![], &HashSet::new(), 1);

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.page, 99);
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("mug"), "%mug%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
