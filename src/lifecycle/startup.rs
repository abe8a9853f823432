//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::LookupConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Bring the service up and serve until a termination signal.
pub async fn run(config: LookupConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        frontend = config.frontend.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let environment = config.environment.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(server.config().listener.bind_address()).await?;
    let port = listener.local_addr()?.port();

    tracing::info!(port, "Listening for connections");
    tracing::info!(environment = %environment, "Environment");
    tracing::info!("Test endpoint: http://localhost:{}/lookup/pikachu", port);

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    server.run(listener, shutdown.subscribe()).await?;

    Ok(())
}
