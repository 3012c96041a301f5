//! CoverMatch Server
//!
//! Serves `POST /predict` and the built frontend.
//!
//! Run with: cargo run --bin covermatch -- --config config.toml
//!
//! # Configuration
//!
//! Without `--config`, the first of these that exists is used:
//! `~/.config/covermatch/config.toml`, `/etc/covermatch/config.toml`,
//! `./config.toml`. Environment variables (`COVERMATCH_*`, `RUST_LOG`)
//! override file values; command-line flags override both.

use clap::Parser;
use covermatch::api::{serve, AppState};
use covermatch::catalog::CatalogStore;
use covermatch::config::{Config, LoggingConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "covermatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Health insurance recommendation server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Policy catalog CSV
    #[arg(long)]
    policies: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(policies) = args.policies {
        config.catalog.policies_csv = policies.to_string_lossy().to_string();
    }

    init_logging(&config.logging);

    tracing::info!("Starting CoverMatch v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Policy catalog: {}", config.catalog.policies_csv);

    let catalog = Arc::new(CatalogStore::new(
        &config.catalog.policies_csv,
        &config.catalog.default_url,
    ));
    if let Err(e) = catalog.reload() {
        tracing::warn!("Policy catalog not loaded yet: {} (will retry per request)", e);
    }

    let state = AppState::new(catalog, config.recommend.limits(), config.server.clone());
    serve(state).await?;

    tracing::info!("CoverMatch server stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` wins when set
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("covermatch={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
