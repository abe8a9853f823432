//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file named by LOOKUP_CONFIG (loader.rs)
//!     → PORT / APP_ENV overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → LookupConfig (validated, immutable)
//!     → shared via Arc with the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::LookupConfig;
pub use schema::ListenerConfig;
pub use schema::UpstreamConfig;
pub use schema::FrontendConfig;
pub use schema::ObservabilityConfig;
