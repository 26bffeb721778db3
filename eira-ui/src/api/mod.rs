//! Relay API
//!
//! Types, errors and HTTP calls for the relay's `/users` and `/oauth` paths.

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpRelay, RelayApi, LOGIN_PATH, LOGOUT_PATH};
pub use error::ApiError;
pub use types::{Application, CreateApplicationRequest, DeleteApplicationRequest, User};
