//! Dashboard server.
//!
//! # Responsibilities
//! - Resolve probe settings at the start of every render
//! - Run one probe per request and render the result
//! - Serve the same result as JSON for scripts
//!
//! # Design Decisions
//! - No shared mutable state: concurrent renders probe independently
//! - Responses are marked `no-store` so proxies never replay a stale status
//! - A client that disconnects mid-render does not cancel its probe early;
//!   the result is simply dropped

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::Local;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{resolve_probe_config, EnvSource};
use crate::dashboard::render::render_page;
use crate::dashboard::view::StatusView;
use crate::endpoint::handlers::health;
use crate::http::{response::not_found, with_common_layers};
use crate::lifecycle::{shutdown, ServerError};
use crate::probe::Prober;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub env: Arc<dyn EnvSource>,
    pub prober: Prober,
}

pub struct DashboardServer {
    router: Router,
}

impl DashboardServer {
    pub fn new(env: Arc<dyn EnvSource>, prober: Prober) -> Self {
        let state = DashboardState { env, prober };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build a server with its own prober.
    pub fn with_env(env: Arc<dyn EnvSource>) -> Result<Self, ServerError> {
        Ok(Self::new(env, Prober::new()?))
    }

    fn build_router(state: DashboardState) -> Router {
        let router = Router::new()
            .route("/", get(index))
            .route("/api/status", get(api_status))
            .route("/health", get(health))
            .fallback(not_found)
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            ));

        with_common_layers(router)
    }

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
        tracing::info!(address = %addr, port = addr.port(), "Dashboard starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("Dashboard stopped");
        Ok(())
    }
}

/// Probe the backend with freshly resolved settings.
async fn current_status(state: &DashboardState) -> StatusView {
    let config = resolve_probe_config(state.env.as_ref());
    let outcome = state.prober.probe(&config).await;
    StatusView::new(&config, outcome, Local::now().time())
}

async fn index(State(state): State<DashboardState>) -> Html<String> {
    let view = current_status(&state).await;
    Html(render_page(&view))
}

async fn api_status(State(state): State<DashboardState>) -> Json<StatusView> {
    Json(current_status(&state).await)
}
