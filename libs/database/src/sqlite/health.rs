use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check SQLite database health
///
/// Executes `SELECT 1` to verify a pooled connection can be acquired and
/// used. Backs the `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    check_health_with_query(db, "SELECT 1").await
}

/// Check SQLite database health with a custom query
///
/// # Example
/// ```ignore
/// use database::sqlite::check_health_with_query;
///
/// check_health_with_query(&db, "SELECT 1 FROM products LIMIT 1").await?;
/// ```
pub async fn check_health_with_query(
    db: &DatabaseConnection,
    query: &str,
) -> Result<(), DatabaseError> {
    debug!(query, "Running SQLite health check");

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, query.to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("SQLite health check failed: {}", e))
    })?;

    debug!("SQLite health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::{connect_from_config, SqliteConfig};

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_with_bad_query_fails() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        let err = check_health_with_query(&db, "SELECT 1 FROM missing_table")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
    }

    #[tokio::test]
    async fn test_check_health_after_close_is_unavailable() {
        let db = connect_from_config(SqliteConfig::in_memory()).await.unwrap();
        let probe = db.clone();
        db.close().await.unwrap();

        let err = check_health(&probe).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
