//! Lookup proxy
//!
//! ```text
//!   Browser / lookup-cli                 lookup-proxy                      Upstream API
//!   ────────────────────   GET /lookup/{id}   ┌───────────────┐   GET {base}/{id}   ┌──────────┐
//!                        ───────────────────▶ │ lowercase id  │ ──────────────────▶ │          │
//!                                             │ fetch         │                     │          │
//!                        ◀─────────────────── │ project JSON  │ ◀────────────────── │          │
//!   {name, id, image}                         └───────────────┘     full record     └──────────┘
//!   {error: "not found"}      (upstream non-success)
//!   {error: "server error"}   (anything else)
//! ```

use lookup_proxy::config::load_from_env;
use lookup_proxy::lifecycle::startup;
use lookup_proxy::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;

    logging::init_logging(&config.observability);

    tracing::info!("lookup-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
