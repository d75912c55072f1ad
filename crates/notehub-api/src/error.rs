//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use notehub_core::error::ErrorKind;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP status and machine-readable code for an error kind.
pub fn status_for_kind(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

// NOTE: `impl IntoResponse for AppError` lives in `notehub-core` (where
// `AppError` is defined) because Rust's orphan rule (E0117) forbids
// implementing the foreign `axum::IntoResponse` trait for the foreign
// `AppError` type here. The HTTP mapping (status + body shape) is identical.
