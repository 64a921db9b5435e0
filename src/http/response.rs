//! Response helpers.
//!
//! # Design Decisions
//! - Plain-text bodies for every non-HTML answer
//! - Internal faults answer `500` with a fixed body; detail goes to the log

use std::any::Any;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Body sent when a handler panics.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Turn a caught handler panic into a `500` response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
