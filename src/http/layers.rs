//! Middleware stack shared by both servers.
//!
//! # Layer Order (outermost first)
//! ```text
//! SetRequestId → PropagateRequestId → Trace → CatchPanic → handler
//! ```

use axum::{body::Body, http::Request, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::request::{MakeRequestUuidV4, RequestIdExt};
use crate::http::response::panic_response;

/// Wrap `router` in request IDs, tracing and panic recovery.
pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request.request_id(),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::X_REQUEST_ID;
    use crate::http::response::INTERNAL_ERROR_BODY;
    use axum::{http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    fn app() -> Router {
        with_common_layers(
            Router::new()
                .route("/", get(|| async { "fine" }))
                .route("/boom", get(boom)),
        )
    }

    #[tokio::test]
    async fn panics_become_500_responses() {
        let res = app()
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], INTERNAL_ERROR_BODY.as_bytes());
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() {
        let res = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(res.headers().get(X_REQUEST_ID).is_some());

        let res = app()
            .oneshot(
                Request::get("/")
                    .header(X_REQUEST_ID, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.headers()[X_REQUEST_ID], "req-42");
    }
}
