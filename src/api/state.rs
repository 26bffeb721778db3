//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::relay::RelayClient;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the relay backend
    pub relay: Arc<RelayClient>,
    /// Host configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(relay: Arc<RelayClient>, config: ApiConfig) -> Self {
        Self {
            relay,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Path of the dashboard's `index.html`
    pub fn index_path(&self) -> PathBuf {
        self.config.dist_dir.join("index.html")
    }
}

/// Host server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory of the built dashboard bundle
    pub dist_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            dist_dir: PathBuf::from("eira-ui/dist"),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Serve the dashboard bundle from `dist_dir`
    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&crate::config::Config> for ApiConfig {
    fn from(config: &crate::config::Config) -> Self {
        Self::new(config.server.host.clone(), config.server.port)
            .with_dist_dir(config.frontend.dist_dir.clone())
    }
}
