use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert an account
    ///
    /// Fails with `EmailAlreadyRegistered` when the email is taken.
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Find an account by exact email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}
