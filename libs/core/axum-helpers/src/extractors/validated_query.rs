//! Query string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor that runs `Validate` after deserializing.
///
/// Undecodable query strings reject with `INVALID_QUERY`; values that break
/// a rule reject with `VALIDATION_ERROR`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
///
/// async fn list(ValidatedQuery(query): ValidatedQuery<ProductQuery>) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}
