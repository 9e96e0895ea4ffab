//! echod: an authenticated HTTP echo service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file (with a SECRET_KEY environment override for
//! the auth token), sets up the Axum router with the bearer gate, and starts
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echod::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use echod::http::start_server;
use echod::routes::create_router;
use echod::state::AppState;

/// echod: a bearer-token authenticated HTTP echo service
#[derive(Parser, Debug)]
#[command(name = "echod", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "echod=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; fatal if the resolved auth token is empty
    let config = AppConfig::load(&args.config)?;
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; blocks until graceful shutdown completes
    start_server(app, &config).await?;

    Ok(())
}
