//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dashboard bundle present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Ready once the dashboard bundle can be served; the relay is not
/// required because the dashboard handles an unreachable relay itself.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_frontend(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let frontend_ok = check_frontend(&state).await;
    let relay_ok = match state.relay.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Relay health probe failed: {}", e);
            false
        }
    };

    let overall_status = if relay_ok && frontend_ok {
        "healthy"
    } else if relay_ok || frontend_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        relay: if relay_ok { "ok" } else { "error" }.to_string(),
        frontend: if frontend_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn check_frontend(state: &AppState) -> bool {
    tokio::fs::metadata(state.index_path())
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
