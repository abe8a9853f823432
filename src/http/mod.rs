//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / echo request ID)
//!     → lookup.rs (GET /lookup/{identifier})
//!     → response.rs (error envelope, status mapping)
//!     → Send to client
//! ```

pub mod assets;
pub mod lookup;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ErrorBody, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
pub use server::HttpServer;
