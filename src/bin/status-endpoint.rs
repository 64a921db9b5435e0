//! Status endpoint server.

use status_dashboard::config::{load_endpoint_config, load_logging_config, ProcessEnv};
use status_dashboard::lifecycle::{bind, trigger_on_signal, Shutdown};
use status_dashboard::observability::logging::init_logging;
use status_dashboard::EndpointServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = ProcessEnv;
    init_logging(&load_logging_config(&env)?);

    let config = load_endpoint_config(&env)?;
    tracing::info!(
        port = config.port,
        environment = %config.environment_label,
        "Configuration loaded"
    );

    // Bind failure is fatal: the error propagates and the process exits non-zero.
    let listener = bind(config.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    trigger_on_signal(shutdown);

    EndpointServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
