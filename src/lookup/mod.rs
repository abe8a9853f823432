//! Upstream lookup subsystem.
//!
//! # Data Flow
//! ```text
//! identifier (path segment)
//!     → normalize (lowercase)
//!     → UpstreamClient::endpoint (base URL + encoded segment)
//!     → single GET, no retry
//!     → non-success status   → LookupError::NotFound
//!     → JSON decode failure  → LookupError::Decode
//!     → UpstreamRecord → Projection { name, id, image }
//! ```

pub mod types;
pub mod upstream;

pub use types::{LookupError, LookupResult, Projection, SetupError};
pub use upstream::{normalize, UpstreamClient};
