//! Metrics collection and exposition.
//!
//! # Metrics
//! - `remote_config_refresh_total` (counter): refresh cycles by outcome
//! - `remote_config_fetch_duration_seconds` (histogram): fetch latency
//! - `remote_config_payload_bytes` (gauge): size of the stored payload
//!
//! Without an installed recorder every call is a no-op.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one refresh cycle.
pub fn record_refresh(success: bool, started: Instant) {
    let outcome = if success { "success" } else { "failure" };
    ::metrics::counter!("remote_config_refresh_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("remote_config_fetch_duration_seconds")
        .record(started.elapsed().as_secs_f64());
}

pub fn record_payload_size(bytes: usize) {
    ::metrics::gauge!("remote_config_payload_bytes").set(bytes as f64);
}
