//! Backend prober.
//!
//! # Responsibilities
//! - Issue exactly one uncached `GET` per call
//! - Read the body of success responses as text
//! - Log failure detail for operators
//! - Record probe metrics
//!
//! # Design Decisions
//! - No retries, no circuit breaking: one best-effort request per render
//! - Connection pooling disabled: nothing survives between probes
//! - `probe` is infallible; failures become `Unreachable` outcomes

use std::time::Instant;

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderValue, CACHE_CONTROL, PRAGMA, USER_AGENT};
use reqwest::Client;

use crate::config::validation::parse_target;
use crate::config::ProbeConfig;
use crate::observability::metrics;
use crate::probe::classify::{classify, ProbeResponse, TransportFailure};
use crate::probe::outcome::{ProbeOutcome, ProbeState};

const PROBE_USER_AGENT: &str = concat!("status-dashboard-probe/", env!("CARGO_PKG_VERSION"));

/// Issues liveness probes against a backend.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    /// Create a prober with its own non-pooling HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()?;

        Ok(Self { client })
    }

    /// Probe `config.target_address` once and classify the result.
    pub async fn probe(&self, config: &ProbeConfig) -> ProbeOutcome {
        let start_time = Instant::now();
        let result = self.fetch(config).await;

        if let Err(failure) = &result {
            tracing::error!(
                target_address = %config.target_address,
                timeout = failure.is_timeout(),
                error = %failure,
                "Backend fetch error"
            );
        }

        let outcome = classify(result);
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        match outcome.state() {
            ProbeState::Ok => tracing::debug!(
                target_address = %config.target_address,
                status = ?outcome.http_status(),
                elapsed_ms,
                "Backend probe succeeded"
            ),
            ProbeState::HttpError => tracing::warn!(
                target_address = %config.target_address,
                status = ?outcome.http_status(),
                elapsed_ms,
                "Backend responded with error status"
            ),
            ProbeState::Unreachable => {}
        }

        metrics::record_probe(outcome.state(), start_time);
        outcome
    }

    async fn fetch(&self, config: &ProbeConfig) -> Result<ProbeResponse, TransportFailure> {
        let url = parse_target(&config.target_address)?;

        let mut request = self
            .client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"))
            .header(PRAGMA, HeaderValue::from_static("no-cache"))
            .header(USER_AGENT, HeaderValue::from_static(PROBE_USER_AGENT));

        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(TransportFailure::Request)?;
        let status = response.status();

        // hyper only records the phrase when it differs from the canonical one.
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());

        // Error bodies are never shown, so they are not read.
        if !status.is_success() {
            return Ok(ProbeResponse {
                status,
                reason,
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(TransportFailure::Body)?;
        Ok(ProbeResponse {
            status,
            reason,
            body,
        })
    }
}
