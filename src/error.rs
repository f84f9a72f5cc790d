//! Error types for the market store service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Service error taxonomy
///
/// Every failure a request can observe falls into one of these buckets;
/// handlers never map errors ad hoc.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller input is missing or malformed
    #[error("validation failed: {0}")]
    Validation(String),

    /// The queried key has no stored data
    #[error("not found: {0}")]
    NotFound(String),

    /// A stored depth encoding cannot be decoded, or a depth ladder cannot
    /// be encoded for storage
    #[error("malformed depth encoding: {0}")]
    MalformedEncoding(#[from] serde_json::Error),

    /// The tabular store cannot be reached or a query/exec failed
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Type alias for store results
pub type StoreResult<T> = Result<T, StoreError>;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::MalformedEncoding(e) => {
                error!("Stored depth could not be decoded: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DECODING_ERROR",
                    "stored order book is unreadable".to_string(),
                )
            }
            Self::Storage(e) => {
                error!("Storage operation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "storage unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
