// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the tower-http trace layer

use crate::constants::headers::REQUEST_ID;
use axum::http::Request;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
///
/// Records an inbound `x-request-id` right away; generated ids are recorded
/// by the request id middleware.
pub fn make_request_span<B>(request: &Request<B>) -> tracing::Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());

    if let Some(request_id) = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
    {
        span.record("request_id", request_id);
    }

    span
}
