//! Relay Routes
//!
//! Forwards the dashboard's `/users/*` and `/oauth/*` calls to the relay
//! backend. Status, body, cookies and redirects come back unchanged.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Method, Response, Uri},
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// ANY /users/*path and /oauth/*path
pub async fn forward(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response<Body>> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let mut forwarded: Vec<(String, Vec<u8>)> = headers
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
        .collect();

    if let Some(host) = headers.get(header::HOST) {
        forwarded.push(("x-forwarded-host".to_string(), host.as_bytes().to_vec()));
    }

    let relayed = state
        .relay
        .forward(method.as_str(), path_and_query, &forwarded, body)
        .await?;

    tracing::info!(
        method = %method,
        path = %uri.path(),
        status = relayed.status,
        "Relayed request"
    );

    let mut builder = Response::builder().status(relayed.status);
    for (name, value) in &relayed.headers {
        builder = builder.header(name.as_str(), value.as_slice());
    }

    builder
        .body(Body::from(relayed.body))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
