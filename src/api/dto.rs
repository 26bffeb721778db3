//! Data Transfer Objects
//!
//! Response bodies produced by the host itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    /// "ok" when the relay answered the probe
    pub relay: String,
    /// "ok" when the dashboard bundle is present
    pub frontend: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub version: String,
}
