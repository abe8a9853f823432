//! Per-request spans.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request::request_id;

/// Span for one inbound request, tagged with its request ID.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request.headers()),
    )
}
