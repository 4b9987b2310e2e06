//! Error handling for the API server
//!
//! This module provides a unified error type that maps to HTTP responses.
//! All user-facing handlers return `Result<T, ApiError>` which automatically
//! converts to an appropriate status code with an `{"error": <message>}`
//! JSON body. The health endpoint uses its own response shape and does not
//! go through this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400) - missing or invalid required fields
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404) - no row for the given id
    #[error("{0}")]
    NotFound(String),

    /// Conflict (409) - duplicate email
    #[error("{0}")]
    Conflict(String),

    /// Internal server error (500) - storage failures outside the taxonomy
    #[error("{0}")]
    Internal(String),
}

/// Error response body: a single `error` key
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                // Raw driver text passes through; log it on the way out.
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// `RowNotFound` becomes 404; a unique-constraint violation (the only
/// constraint on the table is on `email`) becomes the fixed 409 conflict
/// message; everything else surfaces as a server error carrying the raw
/// driver message.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("User not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict("Email must be unique".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("name, email, and date are required".to_string());
        assert_eq!(err.to_string(), "name, email, and date are required");

        let err = ApiError::NotFound("User not found".to_string());
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_uncategorized_sqlx_error_maps_to_internal() {
        let err: ApiError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
