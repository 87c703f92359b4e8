//! Custom error types for the streaming service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::fabric::ResolutionError;

/// Custom error type for the streaming service
///
/// Each variant maps to a distinct HTTP status so callers can branch on the
/// failure kind. A record that exists but has no usable clear playout is a
/// different outcome from a resolver that could not be reached at all.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Unauthorized access
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated but not allowed to perform the operation
    #[error("Forbidden")]
    Forbidden,

    /// Malformed request parameters, detected before any I/O
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested catalog record does not exist
    #[error("Catalog record not found: {0}")]
    NotFound(Uuid),

    /// The catalog store was reachable but the operation failed
    #[error("Catalog store error: {0}")]
    Store(#[from] common::error::DatabaseError),

    /// The content fabric could not resolve the version hash
    #[error("Playout resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// The fabric answered, but no clear HLS playout exists for this version
    #[error("No clear HLS playout available for version hash {0}")]
    PlayoutNotAvailable(String),

    /// Internal server error
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ServiceError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            ServiceError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Catalog record not found: {}", id),
            ),
            ServiceError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Catalog store error".to_string(),
            ),
            ServiceError::Resolution(_) => (
                StatusCode::BAD_GATEWAY,
                "Playout resolution failed".to_string(),
            ),
            ServiceError::PlayoutNotAvailable(hash) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("No clear HLS playout available for version hash {}", hash),
            ),
            ServiceError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for service results
pub type ServiceResult<T> = Result<T, ServiceError>;
