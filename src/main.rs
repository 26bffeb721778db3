//! Eira Host Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings are read from a TOML file (`--config`, or the first of
//! `~/.config/eira/config.toml`, `/etc/eira/config.toml`, `./config.toml`),
//! then `EIRA_*` environment variables, then command-line flags.
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use eira::api::{serve, ApiConfig, AppState};
use eira::config::{generate_default_config, Config, LoggingConfig};
use eira::relay::{RelayClient, RelayClientConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eira")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard host for the TwitchIO OAuth relay")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Base URL of the relay backend
    #[arg(long, global = true)]
    pub relay_url: Option<String>,

    /// Directory of the built dashboard bundle
    #[arg(long, global = true)]
    pub dist_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the host server (default)
    Serve,

    /// Print a commented default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config = load_config(&cli)?;
    init_tracing(&config.logging);

    tracing::info!("Starting Eira v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dashboard bundle: {:?}", config.frontend.dist_dir);

    let relay = Arc::new(
        RelayClient::new(RelayClientConfig::from(&config.relay))
            .context("Failed to build relay client")?,
    );
    tracing::info!("Relay backend: {}", relay.config().base_url);

    match relay.health_check().await {
        Ok(()) => tracing::info!("Relay connection verified"),
        Err(e) => tracing::warn!("Relay not available: {} (dashboard calls will fail)", e),
    }

    let api_config = ApiConfig::from(&config);
    let state = AppState::new(relay, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Eira stopped");
    Ok(())
}

/// Resolve configuration: file, then environment, then flags
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_with_env(&path)?,
            None => Config::from_env(),
        },
    };

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = &cli.relay_url {
        config.relay.url = url.clone();
    }
    if let Some(dir) = &cli.dist_dir {
        config.frontend.dist_dir = dir.clone();
    }

    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("eira={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
