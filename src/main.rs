//! Batch address normalization over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 POSTAL-REST                   │
//!                    │                                               │
//!  Client Request    │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!  ──────────────────┼─▶│  http   │──▶│  options  │──▶│   batch   │  │
//!                    │  │ server  │   │translator │   │ processor │  │
//!                    │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                    │                                      │        │
//!                    │                                      ▼        │
//!  Client Response   │  ┌────────────┐              ┌───────────┐   │
//!  ◀─────────────────┼──│ components │◀─────────────│  engine   │   │
//!                    │  │   mapper   │              │  backend  │   │
//!                    │  └────────────┘              └───────────┘   │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  config │ defaults │ observability │     │ │
//!                    │  │         │ resolver │ logs+metrics  │ ... │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use postal_rest::config::{load_config, ServiceConfig};
use postal_rest::engine::RuleEngine;
use postal_rest::observability::{logging, metrics};
use postal_rest::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "postal-rest")]
#[command(about = "Batch address normalization REST service", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        auth_enabled = config.auth.enabled,
        "postal-rest starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let engine = Arc::new(RuleEngine::new());

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config, engine);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
