use std::time::Duration;

use axum::{body::Body, extract::Request, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Open one span per request, tagged with a generated request id so log
/// lines from concurrent requests can be told apart.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(tracing::Level::INFO, "[REQUEST START]");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    tracing::event!(
        tracing::Level::INFO,
        latency = ?latency,
        status = %response.status(),
        "[REQUEST END]"
    );
}
