//! Status endpoint server.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::EndpointConfig;
use crate::endpoint::handlers::{health, root, EndpointState};
use crate::http::{response::not_found, with_common_layers};
use crate::lifecycle::{shutdown, ServerError};

pub struct EndpointServer {
    router: Router,
    config: EndpointConfig,
}

impl EndpointServer {
    pub fn new(config: EndpointConfig) -> Self {
        let state = EndpointState {
            environment_label: Arc::from(config.environment_label.as_str()),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    fn build_router(state: EndpointState) -> Router {
        let router = Router::new()
            .route("/", get(root))
            .route("/health", get(health))
            .fallback(not_found)
            .with_state(state);

        with_common_layers(router)
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!(
            address = %addr,
            port = addr.port(),
            environment = %self.config.environment_label,
            "Status endpoint starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("Status endpoint stopped");
        Ok(())
    }
}
