//! HTTP API Client
//!
//! Functions for communicating with the relay's user API. Every request is
//! credentialed so the browser attaches the `session` cookie.

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use super::error::ApiError;
use super::types::{
    decode_user, CreateApplicationRequest, DeleteApplicationRequest, StatusResponse, User,
};

pub const ME_PATH: &str = "/users/@me";
pub const TOKEN_PATH: &str = "/users/token";
pub const APPS_PATH: &str = "/users/apps";
pub const STATUS_PATH: &str = "/oauth/status";
pub const LOGIN_PATH: &str = "/users/login";
pub const LOGOUT_PATH: &str = "/users/logout";

/// Operations the dashboard needs from the relay.
///
/// The page flows are written against this trait so they can run without a
/// browser.
pub trait RelayApi {
    /// `GET /users/@me`; `None` when the relay does not know the session
    async fn fetch_me(&self) -> Result<Option<User>, ApiError>;

    /// `GET /users/token`
    async fn fetch_token(&self) -> Result<Option<User>, ApiError>;

    /// `POST /users/apps`; returns the relay's new snapshot of the user
    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<User, ApiError>;

    /// `DELETE /users/apps`
    async fn delete_application(&self, request: &DeleteApplicationRequest) -> Result<(), ApiError>;

    /// `GET /oauth/status`
    async fn fetch_status(&self) -> Result<bool, ApiError>;
}

/// [`RelayApi`] over same-origin `fetch` calls
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRelay;

impl RelayApi for HttpRelay {
    async fn fetch_me(&self) -> Result<Option<User>, ApiError> {
        fetch_me().await
    }

    async fn fetch_token(&self) -> Result<Option<User>, ApiError> {
        fetch_token().await
    }

    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<User, ApiError> {
        create_application(request).await
    }

    async fn delete_application(&self, request: &DeleteApplicationRequest) -> Result<(), ApiError> {
        delete_application(request).await
    }

    async fn fetch_status(&self) -> Result<bool, ApiError> {
        fetch_status().await
    }
}

// ============ API Functions ============

/// Fetch the signed-in user
pub async fn fetch_me() -> Result<Option<User>, ApiError> {
    let response = Request::get(ME_PATH)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = ensure_ok(response).await?;
    read_user(response).await
}

/// Generate a fresh relay access token
pub async fn fetch_token() -> Result<Option<User>, ApiError> {
    let response = Request::get(TOKEN_PATH)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = ensure_ok(response).await?;
    read_user(response).await
}

/// Register a new application
pub async fn create_application(request: &CreateApplicationRequest) -> Result<User, ApiError> {
    let response = Request::post(APPS_PATH)
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = ensure_ok(response).await?;
    read_user(response)
        .await?
        .ok_or_else(|| ApiError::Parse("Empty response body".to_string()))
}

/// Delete an application
pub async fn delete_application(request: &DeleteApplicationRequest) -> Result<(), ApiError> {
    let response = Request::delete(APPS_PATH)
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(response).await?;
    Ok(())
}

/// Check whether the user's application is connected to the relay
pub async fn fetch_status() -> Result<bool, ApiError> {
    let response = Request::get(STATUS_PATH)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = ensure_ok(response).await?;
    let status: StatusResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(status.status)
}

/// Turn a non-2xx response into [`ApiError::Status`] carrying the body text
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message })
}

async fn read_user(response: Response) -> Result<Option<User>, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    decode_user(&text)
}
