//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: isolated in-memory SQLite with migrations applied
//! - `TestDataBuilder`: deterministic test data generation
//! - `jwt`: a fixed-secret `JwtAuth` and bearer header helpers
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("buyer");
//!     let title = builder.name("product", "main");
//! }
//! ```

mod sqlite;

pub use sqlite::{TEST_PASSWORD_HASH, TestDatabase};

/// Builder for test data with deterministic randomization
///
/// The same test name always yields the same values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a unique, well-formed email address
    pub fn email(&self, suffix: &str) -> String {
        format!("{}-{}@example.com", suffix, self.seed)
    }
}

/// Token helpers for exercising protected routes
pub mod jwt {
    use axum_helpers::{JwtAuth, JwtConfig};

    /// Signing secret shared by test routers and test tokens
    pub const TEST_JWT_SECRET: &str = "test-secret-that-is-at-least-32-characters";

    /// A `JwtAuth` signing with [`TEST_JWT_SECRET`]
    pub fn test_jwt_auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(TEST_JWT_SECRET))
    }

    /// `Authorization` header value for `user_id`
    pub fn bearer(auth: &JwtAuth, user_id: i32, email: &str) -> String {
        let token = auth
            .issue_token(&user_id.to_string(), email)
            .expect("Failed to issue test token");
        format!("Bearer {}", token)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a JSON error body carries the expected `error` code
    pub fn assert_error_code(body: &serde_json::Value, expected: &str) {
        assert_eq!(
            body["error"].as_str(),
            Some(expected),
            "unexpected error body: {}",
            body
        );
    }
}
