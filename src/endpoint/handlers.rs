use std::sync::Arc;

use axum::extract::State;

/// Body of every `GET /health` response.
pub const HEALTH_BODY: &str = "OK";

#[derive(Debug, Clone)]
pub struct EndpointState {
    pub environment_label: Arc<str>,
}

pub fn greeting(environment_label: &str) -> String {
    format!("Hello from backend {}", environment_label)
}

pub async fn root(State(state): State<EndpointState>) -> String {
    greeting(&state.environment_label)
}

pub async fn health() -> &'static str {
    HEALTH_BODY
}
