//! HTML rendering of the status page.
//!
//! The page is self-contained (inline CSS, no scripts) and every dynamic
//! value is escaped before it is written.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::dashboard::view::StatusView;
use crate::probe::RenderState;

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center;
       background: #0b0f19; color: #e5e7eb; font-family: system-ui, sans-serif; }
main { width: 100%; max-width: 42rem; padding: 3rem; border: 1px solid #374151; border-radius: 0.75rem;
       background: #111827; text-align: center; }
h1 { margin-top: 0; font-size: 2.5rem; }
.cards { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin: 2rem 0; }
.card { padding: 2rem 1rem; border-radius: 0.75rem; border-top: 4px solid #a855f7; background: rgba(255,255,255,0.05); }
.card h2 { margin: 0 0 0.5rem; font-size: 0.8rem; letter-spacing: 0.1em; text-transform: uppercase; color: #6b7280; }
.value { font-family: ui-monospace, monospace; font-size: 1.5rem; font-weight: 700; overflow-wrap: anywhere; }
.status.online { border-top-color: #22c55e; }
.status.online .value { color: #4ade80; }
.status.offline { border-top-color: #ef4444; background: rgba(127,29,29,0.15); }
.status.offline .value { color: #f87171; }
.detail { margin-top: 0.5rem; font-family: ui-monospace, monospace; font-size: 0.75rem; color: #6b7280; overflow-wrap: anywhere; }
footer { font-family: ui-monospace, monospace; font-size: 0.8rem; color: #6b7280; }
"#;

fn state_class(state: RenderState) -> &'static str {
    match state {
        RenderState::Online => "online",
        RenderState::Offline => "offline",
    }
}

/// Render the full status page.
pub fn render_page(view: &StatusView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Service Status</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>Service Status</h1>
<div class="cards">
<section class="card environment">
<h2>Environment</h2>
<p class="value">{environment}</p>
</section>
<section class="card status {class}" data-state="{state}">
<h2>Backend Status</h2>
<p class="value">{label}</p>
<p class="detail" title="{detail_attr}">{detail}</p>
</section>
</div>
<footer>
<p>Target: {target}</p>
<p>Rendered at {time}</p>
</footer>
</main>
</body>
</html>
"#,
        style = STYLE,
        environment = encode_text(&view.environment),
        class = state_class(view.render_state),
        state = view.outcome.state().as_str(),
        label = encode_text(&view.status_label()),
        detail_attr = encode_double_quoted_attribute(view.detail()),
        detail = encode_text(view.detail()),
        target = encode_text(&view.target),
        time = encode_text(&view.rendered_at),
    )
}
