//! Response handling and transformation.
//!
//! # Responsibilities
//! - Map lookup errors to the two client-facing tiers
//! - Provide the JSON error envelope shared with the client
//!
//! # Design Decisions
//! - Upstream status and error detail are never forwarded
//! - Unmatched routes use the same `not found` envelope as lookups

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::lookup::LookupError;

/// Message for any upstream non-success status.
pub const NOT_FOUND_MESSAGE: &str = "not found";
/// Message for every other failure.
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match self {
            LookupError::NotFound(_) => error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            LookupError::Transport(_) | LookupError::Decode(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        }
    }
}

/// Router fallback for anything that is not a known route.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
