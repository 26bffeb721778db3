//! API Error Types

use thiserror::Error;

/// Failure of a single relay request
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The relay answered with a non-2xx status
    #[error("Relay returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}
