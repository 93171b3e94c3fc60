//! Depth raster API service.
//!
//! HTTP server that turns a CSV depth grid into a stored canonical image
//! and serves grayscale/colorized frame pairs for requested depth ranges.

use anyhow::Result;
use clap::Parser;
use std::{env, net::SocketAddr, sync::Arc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use depth_api::handlers;
use depth_api::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "depth-api")]
#[command(about = "Depth raster processing API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting depth raster API server");

    // Initialize application state (connects to the database and applies
    // the schema)
    let state = Arc::new(AppState::new().await?);
    info!(
        csv = %state.config.data_csv.display(),
        target_width = state.config.target_width,
        "Loaded configuration"
    );

    // Build router
    let app = handlers::build_router(state);

    // PORT overrides the listen address port for container deployments
    let listen = match env::var("PORT") {
        Ok(port) => format!("0.0.0.0:{}", port),
        Err(_) => args.listen,
    };

    let addr: SocketAddr = listen.parse()?;
    info!(address = %addr, "Listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
