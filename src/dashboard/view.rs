//! Render model for the status page.

use chrono::NaiveTime;
use serde::Serialize;

use crate::config::ProbeConfig;
use crate::probe::{ProbeOutcome, RenderState};

/// Longest status label shown on the card before it is cut short.
pub const DISPLAY_LABEL_MAX_CHARS: usize = 48;

/// Everything the page shows for one render.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    pub render_state: RenderState,
    pub environment: String,
    pub target: String,
    pub rendered_at: String,
}

impl StatusView {
    pub fn new(config: &ProbeConfig, outcome: ProbeOutcome, now: NaiveTime) -> Self {
        Self {
            render_state: outcome.render_state(),
            outcome,
            environment: config.environment_label.to_uppercase(),
            target: config.target_address.clone(),
            rendered_at: now.format("%H:%M:%S").to_string(),
        }
    }

    /// Headline of the status card: the backend's own message when online.
    pub fn status_label(&self) -> String {
        match self.render_state {
            RenderState::Online => {
                truncate_for_display(self.outcome.message(), DISPLAY_LABEL_MAX_CHARS)
            }
            RenderState::Offline => RenderState::Offline.label().to_string(),
        }
    }

    /// Full, untruncated probe message.
    pub fn detail(&self) -> &str {
        self.outcome.message()
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn config(label: &str) -> ProbeConfig {
        ProbeConfig {
            environment_label: label.to_string(),
            ..ProbeConfig::default()
        }
    }

    fn nine_oh_five() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 5, 7).unwrap()
    }

    #[test]
    fn test_online_view_shows_message() {
        let outcome = ProbeOutcome::ok(StatusCode::OK, "Hello from backend production".into());
        let view = StatusView::new(&config("production"), outcome, nine_oh_five());

        assert_eq!(view.render_state, RenderState::Online);
        assert_eq!(view.status_label(), "Hello from backend production");
        assert_eq!(view.environment, "PRODUCTION");
        assert_eq!(view.target, "http://backend:8080");
        assert_eq!(view.rendered_at, "09:05:07");
    }

    #[test]
    fn test_offline_view_for_both_failure_classes() {
        for outcome in [
            ProbeOutcome::unreachable(),
            ProbeOutcome::http_error(StatusCode::BAD_GATEWAY, None),
        ] {
            let detail = outcome.message().to_string();
            let view = StatusView::new(&config("staging"), outcome, nine_oh_five());
            assert_eq!(view.render_state, RenderState::Offline);
            assert_eq!(view.status_label(), "Offline");
            assert_eq!(view.detail(), detail);
        }
    }

    #[test]
    fn test_long_message_truncated_for_display_only() {
        let body = "x".repeat(100);
        let outcome = ProbeOutcome::ok(StatusCode::OK, body.clone());
        let view = StatusView::new(&config("development"), outcome, nine_oh_five());

        let label = view.status_label();
        assert_eq!(label.chars().count(), DISPLAY_LABEL_MAX_CHARS);
        assert!(label.ends_with('…'));
        assert_eq!(view.detail(), body);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_for_display("héllo", 10), "héllo");
        assert_eq!(truncate_for_display("héllo wörld", 5), "héll…");
    }
}
