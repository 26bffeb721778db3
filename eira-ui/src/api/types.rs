//! Relay API Types
//!
//! Record shapes returned by the relay backend. Both are owned by the
//! backend; the dashboard only ever holds a re-fetched snapshot.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// The signed-in user as returned by `GET /users/@me`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub twitch_id: i64,
    pub name: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the user's application has a live relay connection
    #[serde(default)]
    pub status: bool,
    /// At most one entry; the relay limits each user to one application
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl User {
    /// The user's single registered application, if any
    pub fn application(&self) -> Option<&Application> {
        self.applications.first()
    }
}

/// A registered application
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_name: String,
    #[serde(default)]
    pub scopes: Option<String>,
    #[serde(default)]
    pub bot_scopes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auths: i64,
    #[serde(default)]
    pub allowed: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Path segment of the application's relay endpoint
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST /users/apps`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateApplicationRequest {
    pub name: String,
    pub client_id: String,
}

/// Body of `DELETE /users/apps`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteApplicationRequest {
    pub application_id: String,
}

/// Body of `GET /oauth/status`
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
}

/// Decode a user body, mapping empty and falsy payloads to `None`.
///
/// The relay answers `@me` with `null` when the session is unknown, and an
/// empty body is treated the same way.
pub fn decode_user(text: &str) -> Result<Option<User>, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))?;

    if is_falsy(&value) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn is_falsy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Read an explicit `null` as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
