//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lookup_requests_total` (counter): lookups by outcome
//! - `lookup_request_duration_seconds` (histogram): latency by outcome
//!
//! Outcomes are `ok`, `not_found` and `server_error`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished lookup.
pub fn record_lookup(outcome: &'static str, start_time: Instant) {
    metrics::counter!("lookup_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("lookup_request_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
