//! Metrics collection and exposition.
//!
//! # Metrics
//! - `postal_requests_total` (counter): requests by method, path, status
//! - `postal_request_duration_seconds` (histogram): latency by method, path
//!
//! # Design Decisions
//! - Prometheus exporter runs on its own address, separate from the API port
//! - Recording is cheap and never load-bearing for correctness

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
///
/// Must run inside a Tokio runtime. Failure to install is logged, not fatal;
/// the service works without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("postal_requests_total", &labels).increment(1);

    let duration_labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
    ];
    metrics::histogram!("postal_request_duration_seconds", &duration_labels)
        .record(start.elapsed().as_secs_f64());
}
