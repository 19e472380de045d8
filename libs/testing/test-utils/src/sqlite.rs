//! SQLite test infrastructure
//!
//! Every `TestDatabase` is a private in-memory database with the marketplace
//! migrations applied, so tests never share state.

use database::sqlite::{SqliteConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::{ConnectionTrait, DatabaseConnection};

/// Well-formed Argon2id PHC string stored for rows inserted directly. It
/// matches no password used in tests.
pub const TEST_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$1mOUuGa+9vKRQ/rQkWCsOoUdbb8ZGm5fTrNHGsC+5GM";

/// Test database wrapper
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new in-memory database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    /// # use domain_products::SqliteProductRepository;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let repo = SqliteProductRepository::new(db.connection());
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = connect_from_config(SqliteConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test")
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (in-memory SQLite)");
        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Insert an account directly and return its id
    ///
    /// The stored hash is [`TEST_PASSWORD_HASH`].
    pub async fn create_test_user(&self, name: &str, email: &str) -> i32 {
        let sql = format!(
            "INSERT INTO users (name, email, password, created_at) VALUES ('{}', '{}', '{}', '{}')",
            escape(name),
            escape(email),
            TEST_PASSWORD_HASH,
            now()
        );
        self.insert(&sql).await
    }

    /// Insert a catalog item directly and return its id
    pub async fn create_test_product(&self, title: &str, price: f64, description: &str) -> i32 {
        let sql = format!(
            "INSERT INTO products (title, price, description, image, created_at) VALUES ('{}', {}, '{}', NULL, '{}')",
            escape(title),
            price,
            escape(description),
            now()
        );
        self.insert(&sql).await
    }

    /// Count rows in `table`
    pub async fn count_rows(&self, table: &str) -> i64 {
        let stmt = sea_orm::Statement::from_string(
            sea_orm::DbBackend::Sqlite,
            format!("SELECT COUNT(*) AS n FROM {}", table),
        );
        self.connection
            .query_one_raw(stmt)
            .await
            .expect("Failed to count rows")
            .and_then(|row| row.try_get::<i64>("", "n").ok())
            .unwrap_or_default()
    }

    async fn insert(&self, sql: &str) -> i32 {
        let result = self
            .connection
            .execute_unprepared(sql)
            .await
            .unwrap_or_else(|e| panic!("Failed to insert test row: {e}"));
        result.last_insert_id() as i32
    }
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let first = TestDatabase::new().await;
        let second = TestDatabase::new().await;

        first.create_test_product("Mug", 9.5, "Ceramic").await;

        assert_eq!(first.count_rows("products").await, 1);
        assert_eq!(second.count_rows("products").await, 0);
    }

    #[tokio::test]
    async fn test_inserts_return_sequential_ids() {
        let db = TestDatabase::new().await;
        let ana = db.create_test_user("Ana", "ana@x.io").await;
        let bo = db.create_test_user("Bo O'Neil", "bo@x.io").await;

        assert_eq!(ana, 1);
        assert_eq!(bo, 2);
    }
}
