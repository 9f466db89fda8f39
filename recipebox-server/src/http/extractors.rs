//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ListParams, ValidationError};

/// Extract and validate a recipe id from path
pub struct RecipeId(pub i64);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { value: String::new() }))?;

        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { value: raw.clone() }))?;

        Ok(Self(id))
    }
}

/// Decode the list query string as plain pairs so repeated keys keep
/// their first value instead of failing the request.
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|e| {
            ApiError::Validation(ValidationError::MalformedQuery {
                reason: e.body_text(),
            })
        })?;

        Ok(ListParams::from_pairs(pairs))
    }
}
