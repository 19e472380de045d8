use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog item - matches the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Image URL
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for creating or fully replacing a product
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 1))]
    #[schema(example = "Mug")]
    pub title: String,
    #[validate(range(min = 0.0))]
    #[schema(example = 12.5)]
    pub price: f64,
    #[validate(length(min = 1))]
    #[schema(example = "Ceramic coffee mug")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductInput {
    /// The image to store; blank values become `None`
    pub fn normalized_image(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }
}

/// Query string for `GET /products`
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Substring matched against title or description
    pub search: Option<String>,
    /// 1-based page number (default 1)
    #[validate(range(min = 1))]
    pub page: Option<i64>,
    /// Page size (default 6, clamped to 50)
    #[validate(range(min = 1))]
    pub limit: Option<i64>,
}

/// A catalog item annotated for the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u64,
    /// Effective page size after clamping
    pub limit: u64,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

/// One page of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<ProductListItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Added to favorites")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, price: f64, description: &str) -> ProductInput {
        ProductInput {
            title: title.to_string(),
            price,
            description: description.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_product_input_validation() {
        assert!(input("Mug", 0.0, "Ceramic").validate().is_ok());
        assert!(input(&"x".repeat(256), 1.0, "Long").validate().is_ok());

        let errors = input("", -1.0, "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_normalized_image() {
        let mut product = input("Mug", 1.0, "Ceramic");
        assert_eq!(product.normalized_image(), None);

        product.image = Some("   ".to_string());
        assert_eq!(product.normalized_image(), None);

        product.image = Some(" https://img.example.com/mug.png ".to_string());
        assert_eq!(
            product.normalized_image().as_deref(),
            Some("https://img.example.com/mug.png")
        );
    }

    #[test]
    fn test_query_rejects_non_positive_page_and_limit() {
        let query = ProductQuery {
            search: None,
            page: Some(0),
            limit: Some(0),
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page"));
        assert!(errors.field_errors().contains_key("limit"));

        assert!(ProductQuery::default().validate().is_ok());
    }

    #[test]
    fn test_list_item_serializes_flat_with_is_favorite() {
        let item = ProductListItem {
            product: Product {
                id: 3,
                title: "Mug".to_string(),
                price: 12.5,
                description: "Ceramic".to_string(),
                image: None,
                created_at: Utc::now(),
            },
            is_favorite: true,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Mug");
        assert_eq!(json["isFavorite"], true);
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_pagination_uses_camel_case_total_pages() {
        let pagination = Pagination {
            page: 1,
            limit: 6,
            total: 7,
            total_pages: 2,
        };
        let json = serde_json::to_value(pagination).unwrap();
        assert_eq!(json["totalPages"], 2);
    }
}
