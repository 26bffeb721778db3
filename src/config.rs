//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub frontend: FrontendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Relay backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_relay_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: default_relay_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Dashboard bundle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Directory holding the `trunk build` output
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("eira-ui/dist")
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default config locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("eira").join("config.toml")),
            Some(PathBuf::from("/etc/eira/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|path| path.exists())
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `EIRA_*` key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("EIRA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("EIRA_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        // Relay overrides
        if let Some(url) = lookup("EIRA_RELAY_URL") {
            self.relay.url = url;
        }

        // Frontend overrides
        if let Some(dir) = lookup("EIRA_DIST_DIR") {
            self.frontend.dist_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("EIRA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("EIRA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Eira Configuration
#
# Environment variables override these settings:
# - EIRA_HOST
# - EIRA_PORT
# - EIRA_RELAY_URL
# - EIRA_DIST_DIR
# - EIRA_LOG_LEVEL
# - EIRA_LOG_FORMAT

[server]
# Host to bind the dashboard host to
host = "0.0.0.0"

# Port to listen on
port = 8000

[relay]
# Base URL of the relay backend that owns /users and /oauth
url = "http://localhost:8080"

# Timeout for forwarded requests in seconds
request_timeout_secs = 30

[frontend]
# Output directory of `trunk build` in eira-ui
dist_dir = "eira-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
