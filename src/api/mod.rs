//! Eira Host HTTP Layer
//!
//! Serves the dashboard bundle and forwards the dashboard's API calls to
//! the relay backend, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Redirect to `/dashboard`
//! - `GET /dashboard`, `GET /dashboard/*path` - Dashboard `index.html`
//! - `GET /static/*file` - Dashboard bundle files
//!
//! ## Relay (forwarded)
//! - `ANY /users/*path` - Login, logout, user and application calls
//! - `ANY /oauth/*path` - OAuth relay endpoints and connection status
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use eira::api::{serve, ApiConfig, AppState};
//! use eira::relay::{RelayClient, RelayClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let relay = Arc::new(RelayClient::new(RelayClientConfig::default())?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(relay, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the host router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/", get(routes::frontend::root_redirect))
        .route("/dashboard", get(routes::frontend::index))
        .route("/dashboard/*path", get(routes::frontend::index))
        .route("/static/*file", get(routes::frontend::static_file));

    let relay_routes = Router::new()
        .route("/users/*path", any(routes::relay::forward))
        .route("/oauth/*path", any(routes::relay::forward));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .merge(dashboard_routes)
        .merge(relay_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the host server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Eira listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Eira shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{RelayClient, RelayClientConfig};
    use axum::{
        body::Body,
        http::{header, HeaderMap, Request, StatusCode, Uri},
        response::{IntoResponse, Redirect, Response},
        routing::post,
    };
    use std::path::Path;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const BOB: &str = r#"{"id":1,"twitch_id":55,"name":"bob","applications":[]}"#;

    /// Minimal stand-in for the relay backend
    async fn spawn_fake_relay() -> String {
        async fn me(headers: HeaderMap) -> Response {
            let signed_in = headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|c| c.contains("session=abc"));

            let body = if signed_in { BOB } else { "null" };
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }

        async fn logout() -> Response {
            (
                [(header::SET_COOKIE, "session=; Max-Age=0; Path=/")],
                Redirect::temporary("/"),
            )
                .into_response()
        }

        async fn create_app(body: String) -> Response {
            if body.contains("\"name\":\"\"") {
                (StatusCode::BAD_REQUEST, "Missing application data").into_response()
            } else {
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
        }

        async fn status(uri: Uri) -> Response {
            let query = uri.query().unwrap_or_default().to_string();
            ([("x-seen-query", query)], r#"{"status":true}"#).into_response()
        }

        let app = Router::new()
            .route("/users/@me", get(me))
            .route("/users/logout", get(logout))
            .route("/users/apps", post(create_app))
            .route("/oauth/status", get(status));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn create_test_app(relay_url: &str, dist_dir: &Path) -> Router {
        let relay = RelayClient::new(RelayClientConfig {
            base_url: relay_url.to_string(),
            request_timeout_ms: 5000,
        })
        .unwrap();
        let config = ApiConfig::default().with_dist_dir(dist_dir);

        build_router(AppState::new(Arc::new(relay), config))
    }

    fn write_bundle(dir: &Path) {
        std::fs::write(dir.join("index.html"), "<html><body>eira</body></html>").unwrap();
        std::fs::write(dir.join("eira-ui-1a2b.js"), "export default 1;").unwrap();
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let dir = tempdir().unwrap();
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/health/live")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_bundle() {
        let dir = tempdir().unwrap();

        let app = create_test_app("http://127.0.0.1:9", dir.path());
        let response = app.oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        write_bundle(dir.path());
        let app = create_test_app("http://127.0.0.1:9", dir.path());
        let response = app.oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_reports_components() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path());
        let relay_url = spawn_fake_relay().await;
        let app = create_test_app(&relay_url, dir.path());

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["relay"], "ok");
        assert_eq!(body["frontend"], "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_dashboard() {
        let dir = tempdir().unwrap();
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    }

    #[tokio::test]
    async fn test_dashboard_routes_serve_index() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path());

        for uri in ["/dashboard", "/dashboard/login", "/dashboard/landing"] {
            let app = create_test_app("http://127.0.0.1:9", dir.path());
            let response = app.oneshot(get_request(uri)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);
            assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
            assert!(body_string(response).await.contains("eira"));
        }
    }

    #[tokio::test]
    async fn test_dashboard_without_bundle() {
        let dir = tempdir().unwrap();
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/dashboard")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("trunk build"));
    }

    #[tokio::test]
    async fn test_static_file() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path());
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/static/eira-ui-1a2b.js")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[tokio::test]
    async fn test_static_missing_file() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path());
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/static/nope.wasm")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_rejects_traversal() {
        let dir = tempdir().unwrap();
        write_bundle(dir.path());
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app
            .oneshot(get_request("/static/assets/../../secret.txt"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forward_passes_session_cookie() {
        let dir = tempdir().unwrap();
        let relay_url = spawn_fake_relay().await;
        let app = create_test_app(&relay_url, dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users/@me")
                    .header(header::COOKIE, "session=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, BOB);
    }

    #[tokio::test]
    async fn test_forward_without_cookie_returns_null() {
        let dir = tempdir().unwrap();
        let relay_url = spawn_fake_relay().await;
        let app = create_test_app(&relay_url, dir.path());

        let response = app.oneshot(get_request("/users/@me")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "null");
    }

    #[tokio::test]
    async fn test_forward_keeps_redirect_and_set_cookie() {
        let dir = tempdir().unwrap();
        let relay_url = spawn_fake_relay().await;
        let app = create_test_app(&relay_url, dir.path());

        let response = app.oneshot(get_request("/users/logout")).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("session=;"));
    }

    #[tokio::test]
    async fn test_forward_json_body_and_error_text() {
        let dir = tempdir().unwrap();
        let relay_url = spawn_fake_relay().await;

        let app = create_test_app(&relay_url, dir.path());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users/apps")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Bot","client_id":"abc"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"name":"Bot","client_id":"abc"}"#);

        let app = create_test_app(&relay_url, dir.path());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users/apps")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"","client_id":"abc"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Missing application data");
    }

    #[tokio::test]
    async fn test_forward_keeps_query_string() {
        let dir = tempdir().unwrap();
        let relay_url = spawn_fake_relay().await;
        let app = create_test_app(&relay_url, dir.path());

        let response = app
            .oneshot(get_request("/oauth/status?verbose=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-seen-query"], "verbose=1");
    }

    #[tokio::test]
    async fn test_forward_unreachable_relay() {
        let dir = tempdir().unwrap();
        let app = create_test_app("http://127.0.0.1:9", dir.path());

        let response = app.oneshot(get_request("/users/@me")).await.unwrap();

        assert!(matches!(
            response.status(),
            StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT
        ));
    }
}
