//! JWT configuration loaded through `core_config::FromEnv`.

use chrono::Duration;
use core_config::{ConfigError, Environment, FromEnv, env_parse, env_required};

/// Signing secret used in development when `JWT_SECRET` is unset. Never valid
/// in production.
pub const DEV_JWT_SECRET: &str = "dev-secret";

/// Token lifetime when `JWT_TTL_SECS` is unset (one day).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` - required in production (at least 32 characters);
///   falls back to `dev-secret` in development
/// - `JWT_TTL_SECS` (default: 86400)
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("test-secret").with_ttl(chrono::Duration::minutes(5));
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Lifetime of issued tokens
    pub ttl: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        let secret = if environment.is_production() {
            let secret = env_required("JWT_SECRET")?;
            if secret.len() < MIN_PRODUCTION_SECRET_LEN {
                return Err(ConfigError::ParseError {
                    key: "JWT_SECRET".to_string(),
                    details: format!(
                        "must be at least {} characters in production (got {}). Generate one with: openssl rand -base64 32",
                        MIN_PRODUCTION_SECRET_LEN,
                        secret.len()
                    ),
                });
            }
            secret
        } else {
            match std::env::var("JWT_SECRET") {
                Ok(secret) if !secret.is_empty() => secret,
                _ => {
                    tracing::warn!(
                        "JWT_SECRET is not set, signing tokens with the insecure development secret"
                    );
                    DEV_JWT_SECRET.to_string()
                }
            }
        };

        let ttl_secs: i64 = env_parse("JWT_TTL_SECS", &DEFAULT_TOKEN_TTL_SECS.to_string())?;
        if ttl_secs <= 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_TTL_SECS".to_string(),
                details: format!("must be positive (got {})", ttl_secs),
            });
        }

        Ok(Self {
            secret,
            ttl: Duration::seconds(ttl_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_uses_default_ttl() {
        let config = JwtConfig::new("short");
        assert_eq!(config.secret, "short");
        assert_eq!(config.ttl, Duration::days(1));
    }

    #[test]
    fn test_jwt_config_development_falls_back_to_dev_secret() {
        temp_env::with_vars(
            [("APP_ENV", None::<&str>), ("JWT_SECRET", None), ("JWT_TTL_SECS", None)],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, DEV_JWT_SECRET);
                assert_eq!(config.ttl, Duration::seconds(DEFAULT_TOKEN_TTL_SECS));
            },
        );
    }

    #[test]
    fn test_jwt_config_development_accepts_short_secret() {
        temp_env::with_vars(
            [("APP_ENV", Some("development")), ("JWT_SECRET", Some("local"))],
            || {
                assert_eq!(JwtConfig::from_env().unwrap().secret, "local");
            },
        );
    }

    #[test]
    fn test_jwt_config_production_requires_secret() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("JWT_SECRET", None)],
            || {
                let err = JwtConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "JWT_SECRET"));
            },
        );
    }

    #[test]
    fn test_jwt_config_production_rejects_short_secret() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("JWT_SECRET", Some("short"))],
            || {
                let err = JwtConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("32 characters"));
            },
        );
    }

    #[test]
    fn test_jwt_config_production_with_strong_secret() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("JWT_SECRET", Some(STRONG_SECRET)),
                ("JWT_TTL_SECS", Some("3600")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, STRONG_SECRET);
                assert_eq!(config.ttl, Duration::hours(1));
            },
        );
    }

    #[test]
    fn test_jwt_config_rejects_non_positive_ttl() {
        temp_env::with_vars(
            [("APP_ENV", None::<&str>), ("JWT_TTL_SECS", Some("0"))],
            || {
                let err = JwtConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("JWT_TTL_SECS"));
            },
        );
    }
}
