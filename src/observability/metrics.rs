//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dashboard_probe_total` (counter): probes by outcome state
//! - `dashboard_probe_duration_seconds` (histogram): probe latency by state

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::lifecycle::ServerError;
use crate::probe::ProbeState;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), ServerError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_probe(state: ProbeState, start: Instant) {
    let label = state.as_str();
    counter!("dashboard_probe_total", "state" => label).increment(1);
    histogram!("dashboard_probe_duration_seconds", "state" => label)
        .record(start.elapsed().as_secs_f64());
}
