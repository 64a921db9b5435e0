//! Outcome classification.
//!
//! Pure mapping from what the transport produced to a `ProbeOutcome`, kept
//! apart from the network code so every branch is testable offline.

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ValidationError;
use crate::probe::outcome::ProbeOutcome;

/// What came back from a probe that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: StatusCode,
    /// Reason phrase from the status line, when it is not the canonical one.
    pub reason: Option<String>,
    /// Response text. Only read for success statuses.
    pub body: String,
}

/// A probe that never produced a usable HTTP answer.
///
/// Logged for operators; never shown on the page.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("invalid probe target: {0}")]
    InvalidTarget(#[from] ValidationError),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl TransportFailure {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportFailure::Request(e) | TransportFailure::Body(e) => e.is_timeout(),
            TransportFailure::InvalidTarget(_) => false,
        }
    }
}

/// Classify a probe result. Total: every input yields an outcome.
pub fn classify(result: Result<ProbeResponse, TransportFailure>) -> ProbeOutcome {
    match result {
        Ok(response) if response.status.is_success() => {
            ProbeOutcome::ok(response.status, response.body)
        }
        Ok(response) => ProbeOutcome::http_error(response.status, response.reason.as_deref()),
        Err(_) => ProbeOutcome::unreachable(),
    }
}
