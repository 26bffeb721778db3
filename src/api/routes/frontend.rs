//! Dashboard Routes
//!
//! Serves the dashboard bundle built by trunk.
//!
//! - GET / - Redirect to the dashboard
//! - GET /dashboard, /dashboard/*path - The bundle's index.html (client-side routing)
//! - GET /static/*file - Bundle files

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::{IntoResponse, Redirect},
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Where `/` and the relay's post-login redirect land
pub const DASHBOARD_PATH: &str = "/dashboard";

/// GET /
pub async fn root_redirect() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// GET /dashboard and /dashboard/*path
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Response<Body>> {
    match tokio::fs::read(state.index_path()).await {
        Ok(content) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .header(header::CACHE_CONTROL, "no-cache")
            .body(Body::from(content))
            .map_err(|e| ApiError::Internal(e.to_string())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((
            StatusCode::NOT_FOUND,
            "Dashboard not built. Run 'trunk build' in the eira-ui directory.",
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /static/*file
pub async fn static_file(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> ApiResult<Response<Body>> {
    let file = file.trim_start_matches('/');

    // Reject traversal out of the bundle directory
    if file.is_empty() || file.split(['/', '\\']).any(|part| part == "..") {
        return Err(ApiError::BadRequest("Invalid path".to_string()));
    }

    let path = state.config.dist_dir.join(file);
    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound(file.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let mime = mime_guess::from_path(file).first_or_octet_stream().to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime)
        .header(header::CACHE_CONTROL, cache_control(file))
        .body(Body::from(content))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Cache policy by file type
fn cache_control(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "no-cache"
    } else if [".wasm", ".js", ".css"].iter().any(|ext| path.ends_with(ext)) {
        // trunk names these with a content hash
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=3600"
    }
}
