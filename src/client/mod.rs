//! Companion client.
//!
//! Calls the proxy's lookup endpoint and renders the outcome into a
//! [`ResultView`], the same state transitions `static/app.js` applies to the
//! browser page.

pub mod proxy;
pub mod view;

pub use proxy::{ClientError, LookupClient};
pub use view::ResultView;
