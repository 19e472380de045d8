use std::sync::Arc;

use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // Subject (user ID)
    pub email: String, // User email
    pub iat: i64,      // Issued at
    pub exp: i64,      // Expiration time
}

impl JwtClaims {
    /// The subject parsed as a numeric account id.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Stateless HS256 token issuing and verification.
///
/// Cheap to clone; the keys are shared.
#[derive(Clone)]
pub struct JwtAuth {
    keys: Arc<Keys>,
    ttl: Duration,
}

impl JwtAuth {
    /// Create a new JWT auth instance.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let jwt_auth = JwtAuth::new(&JwtConfig::from_env()?);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!(ttl_secs = config.ttl.num_seconds(), "JWT auth initialized");

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            ttl: config.ttl,
        }
    }

    /// Issue a token with the configured lifetime
    pub fn issue_token(&self, subject: &str, email: &str) -> eyre::Result<String> {
        self.issue_token_with_ttl(subject, email, self.ttl)
    }

    /// Issue a token that expires `ttl` from now
    pub fn issue_token_with_ttl(
        &self,
        subject: &str,
        email: &str,
        ttl: Duration,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)?;
        Ok(token)
    }

    /// Verify signature, algorithm and expiry, returning the embedded claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<JwtClaims>(token, &self.keys.decoding, &validation)?;
        Ok(token_data.claims)
    }
}
