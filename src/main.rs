//! Status dashboard server.
//!
//! Renders the backend status page, probing `BACKEND_URL` on every request.

use std::sync::Arc;

use status_dashboard::config::{
    load_dashboard_config, load_logging_config, resolve_probe_config,
    validation::parse_target, ProcessEnv,
};
use status_dashboard::lifecycle::{bind, trigger_on_signal, Shutdown};
use status_dashboard::observability::{logging::init_logging, metrics::init_metrics};
use status_dashboard::DashboardServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = ProcessEnv;
    init_logging(&load_logging_config(&env)?);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "status-dashboard starting");

    let config = load_dashboard_config(&env)?;

    // Probe settings are re-read per render; this only warns early.
    let probe_config = resolve_probe_config(&env);
    if let Err(e) = parse_target(&probe_config.target_address) {
        tracing::warn!(error = %e, "Backend URL is invalid; every probe will report unreachable");
    }
    tracing::info!(
        target_address = %probe_config.target_address,
        environment = %probe_config.environment_label,
        timeout = ?probe_config.timeout,
        "Configuration loaded"
    );

    if let Some(addr) = config.metrics_address {
        init_metrics(addr)?;
    }

    let listener = bind(config.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    trigger_on_signal(shutdown);

    let server = DashboardServer::with_env(Arc::new(env))?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
