//! Probe outcome model.
//!
//! # States
//! - Ok: backend answered with a 2xx status
//! - HttpError: backend answered, but with a non-success status
//! - Unreachable: no HTTP answer at all (DNS, refused, timeout, bad target)
//!
//! # Render State
//! ```text
//! Ok                      → Online
//! HttpError | Unreachable → Offline
//! ```

use reqwest::StatusCode;
use serde::Serialize;

/// Message carried by every `Unreachable` outcome.
pub const UNREACHABLE_MESSAGE: &str = "Failed to connect to backend.";

/// Three-valued classification of a probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeState {
    Ok,
    HttpError,
    Unreachable,
}

impl ProbeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeState::Ok => "ok",
            ProbeState::HttpError => "http_error",
            ProbeState::Unreachable => "unreachable",
        }
    }
}

/// Display mode of the backend status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    Online,
    Offline,
}

impl RenderState {
    pub fn label(&self) -> &'static str {
        match self {
            RenderState::Online => "Online",
            RenderState::Offline => "Offline",
        }
    }
}

/// Result of one probe attempt.
///
/// The message is never empty and never contains transport error detail, so
/// it can be shown as-is. Fields are private to keep that guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    state: ProbeState,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
}

impl ProbeOutcome {
    /// A 2xx answer. An empty body is replaced by the status line so the
    /// dashboard always has something to show.
    pub fn ok(status: StatusCode, body: String) -> Self {
        let message = if body.is_empty() {
            status_line(status, None)
        } else {
            body
        };

        Self {
            state: ProbeState::Ok,
            message,
            http_status: Some(status.as_u16()),
        }
    }

    /// A non-success answer: `Error: <code> <reason>`.
    ///
    /// `reason` is the phrase the backend sent, when it differs from the
    /// canonical one for `status`.
    pub fn http_error(status: StatusCode, reason: Option<&str>) -> Self {
        Self {
            state: ProbeState::HttpError,
            message: format!("Error: {}", status_line(status, reason)),
            http_status: Some(status.as_u16()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            state: ProbeState::Unreachable,
            message: UNREACHABLE_MESSAGE.to_string(),
            http_status: None,
        }
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// True for both `HttpError` and `Unreachable`.
    pub fn is_error(&self) -> bool {
        self.state != ProbeState::Ok
    }

    pub fn render_state(&self) -> RenderState {
        if self.is_error() {
            RenderState::Offline
        } else {
            RenderState::Online
        }
    }
}

/// `503 Service Unavailable`, or just `599` when no reason phrase is known.
fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .or_else(|| status.canonical_reason());

    match reason {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
