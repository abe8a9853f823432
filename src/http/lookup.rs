use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::lookup::LookupError;
use crate::observability::metrics;

/// `GET /lookup/{identifier}`
pub async fn lookup(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    match state.upstream.fetch(&identifier).await {
        Ok(projection) => {
            tracing::debug!(request_id = %request_id, identifier = %identifier, id = projection.id, "Lookup succeeded");
            metrics::record_lookup("ok", start_time);
            Json(projection).into_response()
        }
        Err(e @ LookupError::NotFound(_)) => {
            tracing::info!(request_id = %request_id, identifier = %identifier, error = %e, "Lookup not found");
            metrics::record_lookup(e.outcome(), start_time);
            e.into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, identifier = %identifier, error = %e, "Lookup failed");
            metrics::record_lookup(e.outcome(), start_time);
            e.into_response()
        }
    }
}
