//! Custom error types for the to-do service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error type surfaced by request handlers and middleware
///
/// The 404 for a todo that exists under another owner is deliberately the
/// same as for a missing id, and the 400 for a wrong password is the same
/// as for an unknown user.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field failed presence validation
    #[error("{0}")]
    Validation(String),

    /// Registration attempted with a username that already exists
    #[error("user already exists")]
    DuplicateUsername,

    /// Login failed, for an unknown user or a wrong password alike
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Protected route called without a bearer token
    #[error("missing bearer token")]
    MissingToken,

    /// Bearer token present but failed signature or expiry verification
    #[error("invalid or expired token")]
    InvalidToken,

    /// Todo absent, or owned by another user
    #[error("todo not found")]
    TodoNotFound,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DuplicateUsername => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, "Access denied".to_string()),
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            ApiError::TodoNotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
