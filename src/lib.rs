//! Lookup proxy library.
//!
//! Forwards an identifier to an upstream REST API and answers with a
//! three-field projection of the upstream record.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod observability;

pub use config::LookupConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use lookup::{LookupError, Projection};
