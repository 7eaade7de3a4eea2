//! Request tracing middleware.
//!
//! Tags every request with a fresh ID and wraps handler execution in a
//! tracing span carrying that ID, so all logs emitted while serving a
//! request can be correlated.

use std::fmt;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Identifier assigned to a single request, available to handlers via
/// request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Middleware wrapping each request in an identified tracing span.
///
/// Keep this as the outermost layer so the span covers the full request
/// lifecycle. The completion event records the response status and elapsed
/// time inside the same span.
pub async fn trace_request(mut request: Request, next: Next) -> Response {
    let id = RequestId::new();
    let span = tracing::info_span!(
        "request",
        id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    request.extensions_mut().insert(id);

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;

    let _guard = span.enter();
    tracing::info!(
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::util::ServiceExt;

    async fn echo_id(Extension(id): Extension<RequestId>) -> String {
        id.to_string()
    }

    #[tokio::test]
    async fn handlers_see_the_assigned_request_id() {
        let app = Router::new()
            .route("/", get(echo_id))
            .layer(middleware::from_fn(trace_request));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let id = String::from_utf8(body.to_vec()).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
