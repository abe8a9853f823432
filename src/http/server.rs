//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS header)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::LookupConfig;
use crate::http::{assets, lookup, request, response};
use crate::lookup::{SetupError, UpstreamClient};
use crate::observability::spans;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the lookup proxy.
pub struct HttpServer {
    router: Router,
    config: LookupConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LookupConfig) -> Result<Self, SetupError> {
        let state = AppState {
            upstream: UpstreamClient::new(&config.upstream)?,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &LookupConfig, state: AppState) -> Router {
        let mut router = Router::new().route("/lookup/{identifier}", get(lookup::lookup));

        if config.frontend.enabled {
            router = router
                .route("/", get(assets::index))
                .route("/app.js", get(assets::app_js));
        }

        router
            .fallback(response::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(request::set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(spans::make_request_span))
                    .layer(request::propagate_request_id_layer())
                    // Any origin may call the API.
                    .layer(SetResponseHeaderLayer::overriding(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN,
                        HeaderValue::from_static("*"),
                    )),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown broadcast arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}
