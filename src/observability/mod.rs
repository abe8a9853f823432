//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (subscriber setup, structured log events)
//!     → metrics.rs (counters, histograms)
//!     → spans.rs (per-request spans carrying the request ID)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```

pub mod logging;
pub mod metrics;
pub mod spans;
