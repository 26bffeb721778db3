//! API Error Types
//!
//! Defines error types for the host and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::relay::RelayError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Relay backend failure
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Relay(RelayError::Timeout) => (StatusCode::GATEWAY_TIMEOUT, "RELAY_TIMEOUT"),
            ApiError::Relay(RelayError::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_RELAY_REQUEST")
            }
            ApiError::Relay(_) => (StatusCode::BAD_GATEWAY, "RELAY_UNAVAILABLE"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_errors_map_to_gateway_statuses() {
        let timeout = ApiError::Relay(RelayError::Timeout).into_response();
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let down = ApiError::Relay(RelayError::Unavailable("refused".into())).into_response();
        assert_eq!(down.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found() {
        let response = ApiError::NotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
