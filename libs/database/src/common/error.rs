use sea_orm::DbErr;

/// Unified database error type for connection and health operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SQLite errors surfaced through SeaORM
    #[error("SQLite error: {0}")]
    Sqlite(#[from] DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

impl DatabaseError {
    /// True when the store could not hand out a connection, as opposed to
    /// a query that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Sqlite(err) => is_connection_unavailable(err),
            Self::HealthCheckFailed(_) => true,
        }
    }
}

/// Whether a SeaORM error means no pooled connection could be acquired.
pub fn is_connection_unavailable(err: &DbErr) -> bool {
    matches!(err, DbErr::ConnectionAcquire(_) | DbErr::Conn(_))
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
