//! API error types with exact response bodies.
//!
//! Response bodies are plain text and part of the external contract,
//! including the misspelled idempotent no-op body. Callers match on these
//! strings; do not change them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body did not parse into the expected shape.
    #[error("Error parsing request body: {0}")]
    InvalidBody(String),

    /// Token missing, invalid, or role insufficient.
    #[error("unauthorized")]
    Unauthorized,

    /// Key fetch or existence check failed.
    #[error("Internal server error")]
    Internal,

    /// Event-publish strategy failed.
    #[error("Send bus fail")]
    SendBusFailed,

    /// Direct-create strategy failed.
    #[error("create table fail")]
    CreateTableFailed,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal | ApiError::SendBusFailed | ApiError::CreateTableFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
