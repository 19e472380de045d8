//! Error and retry helpers shared by the connector and health modules

pub mod error;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult, is_connection_unavailable};
pub use retry::{RetryConfig, retry, retry_if, retry_with_backoff};
