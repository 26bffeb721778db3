//! Relay REST Client
//!
//! Forwards raw requests to the relay backend without following redirects.

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect, Client, Method};
use std::time::Duration;
use thiserror::Error;

use crate::config::RelayConfig;

/// Headers that only describe a single hop and must not be forwarded
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// Whether a header belongs to the connection rather than the message
pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Relay backend client
pub struct RelayClient {
    client: Client,
    config: RelayClientConfig,
}

/// Configuration for the relay client
#[derive(Debug, Clone)]
pub struct RelayClientConfig {
    /// Base URL of the relay (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl From<&RelayConfig> for RelayClientConfig {
    fn from(config: &RelayConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            request_timeout_ms: config.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// A relay response, passed back to the browser as-is
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    /// End-to-end headers in arrival order; repeated names stay repeated
    pub headers: Vec<(String, Vec<u8>)>,
    pub body: Bytes,
}

/// Relay client errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Relay request timed out")]
    Timeout,

    #[error("Relay is unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid relay request: {0}")]
    InvalidRequest(String),

    #[error("Relay request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl RelayError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RelayError::Timeout
        } else if e.is_connect() {
            RelayError::Unavailable(e.to_string())
        } else {
            RelayError::Request(e)
        }
    }
}

impl RelayClient {
    /// Create a new relay client with the given configuration
    pub fn new(config: RelayClientConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &RelayClientConfig {
        &self.config
    }

    /// Check if the relay answers an anonymous `GET /users/@me`
    pub async fn health_check(&self) -> Result<(), RelayError> {
        let url = format!("{}/users/@me", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RelayError::from_reqwest)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RelayError::Unavailable(format!(
                "health probe returned {}",
                response.status()
            )))
        }
    }

    /// Forward one request to the relay.
    ///
    /// `path_and_query` is appended to the base URL. Hop-by-hop headers are
    /// dropped in both directions; everything else, cookies included,
    /// passes through.
    pub async fn forward(
        &self,
        method: &str,
        path_and_query: &str,
        headers: &[(String, Vec<u8>)],
        body: Bytes,
    ) -> Result<RelayResponse, RelayError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
        let url = format!("{}{}", self.config.base_url, path_and_query);

        let mut outgoing = HeaderMap::new();
        for (name, value) in headers.iter().filter(|(name, _)| !is_hop_by_hop(name)) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
            let value = HeaderValue::from_bytes(value)
                .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
            outgoing.append(name, value);
        }

        tracing::debug!(%method, %url, "Forwarding request to relay");

        let response = self
            .client
            .request(method, &url)
            .headers(outgoing)
            .body(body)
            .send()
            .await
            .map_err(RelayError::from_reqwest)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect();
        let body = response.bytes().await.map_err(RelayError::from_reqwest)?;

        Ok(RelayResponse {
            status,
            headers,
            body,
        })
    }
}
