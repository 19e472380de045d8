//! Argon2id password hashing

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// Well-formed Argon2id hash with the default cost parameters. Checked
/// against when an email is unknown so a failed login costs the same either
/// way. It matches no password.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dW5rbm93bmFjY291bnRzYWx0$Vhb2u4iF7wCkX3oJ1LkJ2m3Kq0n8ZlH6YtB4cR9sPdE";

/// Hash `password` with a fresh random salt into a PHC string.
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Check `password` against a stored PHC string.
///
/// A malformed stored hash verifies as `false`.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Spend one verification's worth of work on a login whose email is unknown.
pub fn verify_unknown_account(password: &str) {
    let _ = verify_password(password, UNKNOWN_ACCOUNT_HASH);
}
