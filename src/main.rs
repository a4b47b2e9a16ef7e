//! Launch Dashboard Server
//!
//! Run with: cargo run --bin launch-dashboard
//!
//! Loads the launch records once, then serves the dashboard until Ctrl+C.
//! Everything has a default, so no flags or environment are required.
//!
//! # Configuration
//!
//! Config file (`--config`, or `config.toml` in the default locations) and
//! environment variables:
//! - `LAUNCH_DASHBOARD_DATA`: CSV file (default: spacex_launch_dash.csv)
//! - `LAUNCH_DASHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCH_DASHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCH_DASHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCH_DASHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full tracing filter, overrides the log level

use anyhow::Context;
use clap::Parser;
use launch_dashboard::api::{serve, ApiConfig, AppState};
use launch_dashboard::config::{Config, LoggingConfig};
use launch_dashboard::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launch-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard of rocket launch outcomes by site and payload")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV, overrides the config file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = args.data {
        config.dataset.path = data;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting launch dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    // A missing or malformed dataset is fatal
    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("failed to load dataset {:?}", config.dataset.path))?;
    tracing::info!("Dataset loaded: {}", dataset.stats());

    let api_config = ApiConfig::from(config.server);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Launch dashboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` wins when set
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "launch_dashboard={level},tower_http={level}",
            level = logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
