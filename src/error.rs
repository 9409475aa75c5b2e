//! Error types for the employee gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Requested record does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream kept rate-limiting until the retry budget ran out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Any other upstream failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Malformed inbound request
    #[error("Invalid request: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status this error surfaces as on the inbound side.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::Timeout(msg)
            | ApiError::Upstream(msg)
            | ApiError::Validation(msg) => msg,
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, ApiError>;
