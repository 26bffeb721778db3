//! # Eira
//!
//! Dashboard host for the TwitchIO OAuth relay. Serves the Leptos dashboard
//! built from `eira-ui/` and forwards its `/users` and `/oauth` calls to the
//! relay backend, so the browser sees a single origin and the `session`
//! cookie travels with every request.
//!
//! ## Modules
//!
//! - [`api`]: Axum router, dashboard bundle serving and request forwarding
//! - [`relay`]: HTTP client for the relay backend
//! - [`config`]: TOML configuration with `EIRA_*` environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eira::{build_router, ApiConfig, AppState, Config, RelayClient, RelayClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let relay = Arc::new(RelayClient::new(RelayClientConfig::from(&config.relay))?);
//!
//!     let router = build_router(AppState::new(relay, ApiConfig::from(&config)));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod relay;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};

pub use relay::{RelayClient, RelayClientConfig, RelayError, RelayResponse};
