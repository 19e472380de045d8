//! User Service - registration and credential checks

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, RegisterRequest, User};
use crate::password::{hash_password, verify_password, verify_unknown_account};
use crate::repository::UserRepository;

/// Service layer for account business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new account
    ///
    /// The password is hashed before it reaches the repository. A concurrent
    /// registration that wins the race still surfaces as
    /// `EmailAlreadyRegistered` through the unique index.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let password_hash = hash_password(&input.password)?;

        self.repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await
    }

    /// Verify login credentials
    #[instrument(skip(self, password))]
    pub async fn verify_credentials(&self, email: &str, password: &str) -> UserResult<User> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            verify_unknown_account(password);
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash) {
            tracing::info!(user_id = user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
