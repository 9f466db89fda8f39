//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON responses with
//! appropriate status codes. Storage and filesystem failures are logged
//! here and reported to the client without internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Input could not be coerced (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database { action: &'static str, source: DbError },

    /// Uploaded image could not be written (500, logged)
    Upload(std::io::Error),

    /// Request exceeded the configured timeout (408)
    Timeout,
}

impl ApiError {
    /// Map a repository error, describing a failure as `action`.
    ///
    /// Not-found passes through as 404 so callers can `?` straight from
    /// the repository.
    pub fn storage(action: &'static str) -> impl FnOnce(DbError) -> Self {
        move |e| match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { action, source },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Database { action, source } => {
                // Log the actual error, return generic message
                tracing::error!("{}: {}", action, source);
                (StatusCode::INTERNAL_SERVER_ERROR, action.to_string())
            }
            Self::Upload(e) => {
                tracing::error!("Failed to store uploaded image: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store image".to_string(),
                )
            }
            Self::Timeout => (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::storage("Failed to load recipes")(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::InvalidNumber {
            field: "carbs",
            value: "many".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "carbs must be a number, got 'many'" })
        );
    }

    #[tokio::test]
    async fn not_found_is_404_with_message() {
        let err = ApiError::NotFound {
            resource: "Recipe",
            id: "9".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Recipe not found" }));
    }

    #[tokio::test]
    async fn database_error_is_500_with_action() {
        let err = ApiError::storage("Failed to create recipe")(DbError::Sqlx(
            sqlx::Error::PoolClosed,
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to create recipe" })
        );
    }

    #[test]
    fn storage_keeps_not_found() {
        let err = ApiError::storage("Failed to delete recipe")(DbError::NotFound {
            resource: "Recipe",
            id: "3".into(),
        });
        assert!(matches!(err, ApiError::NotFound { resource: "Recipe", .. }));
    }

    #[tokio::test]
    async fn timeout_is_408_json() {
        let response = ApiError::Timeout.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_json(response).await, json!({ "error": "Request timed out" }));
    }
}
