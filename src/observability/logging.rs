//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` from the config applies to
/// this crate and tower-http. Call once, before any other subsystem starts.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("postal_rest={level},tower_http={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
