use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allowed browser origins.
///
/// Loaded from `CORS_ALLOWED_ORIGIN`, a comma-separated list such as
/// `http://localhost:3000,https://shop.example.com`. When unset or empty
/// every origin is allowed.
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    /// Allow any origin.
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn with_origins(allowed_origins: Vec<HeaderValue>) -> Self {
        Self { allowed_origins }
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Build the tower-http layer for this configuration.
    pub fn layer(&self) -> CorsLayer {
        if self.is_permissive() {
            create_permissive_cors_layer()
        } else {
            create_cors_layer(self.allowed_origins.clone())
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::permissive());
        };

        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { allowed_origins })
    }
}

/// Creates a CORS layer restricted to `allowed_origins`.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - Credentials allowed
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_unset_is_permissive() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(CorsConfig::from_env().unwrap().is_permissive());
        });
    }

    #[test]
    fn test_cors_config_parses_comma_separated_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://shop.example.com,"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec![
                        HeaderValue::from_static("http://localhost:3000"),
                        HeaderValue::from_static("https://shop.example.com"),
                    ]
                );
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_invalid_header_value() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://bad\u{7f}origin"), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
