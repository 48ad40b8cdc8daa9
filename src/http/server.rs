//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handler
//! - Wire up middleware (request ID, tracing)
//! - Dispatch requests to the path router
//! - Forward matched requests upstream
//! - Record request metrics

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::request::request_id;
use crate::observability::metrics;
use crate::routing::{RouteDecision, Router as PathRouter};
use crate::upstream::Forwarder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<PathRouter>,
    pub forwarder: Forwarder,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let forwarder = Forwarder::new(&config.upstream)?;
        Ok(Self::with_forwarder(config, forwarder))
    }

    /// Create a server around an existing outbound client.
    pub fn with_forwarder(config: ProxyConfig, forwarder: Forwarder) -> Self {
        let state = AppState {
            router: Arc::new(PathRouter::from_config(&config.routing, &config.upstream)),
            forwarder,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The fully layered application, for driving requests without a socket.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            access_prefix_len = self.config.routing.access_prefix.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Main proxy handler: route the path, then forward or reject.
async fn proxy_handler(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);
    let path = uri.path();

    let (shape, response) = match state.router.route(path) {
        RouteDecision::Rejected(err) => {
            tracing::debug!(
                request_id = %request_id,
                reason = err.kind(),
                status = %err.status(),
                "Request rejected"
            );
            ("none", err.into_response())
        }
        RouteDecision::Forward(upstream) => {
            let shape = upstream.shape.as_str();
            tracing::debug!(
                request_id = %request_id,
                shape = shape,
                upstream = %upstream.url,
                "Forwarding request"
            );
            let response = match state.forwarder.forward(&upstream).await {
                Ok(response) => response,
                Err(err) => {
                    if matches!(err, ProxyError::UpstreamFault(_)) {
                        tracing::error!(request_id = %request_id, upstream = %upstream.url, error = %err, "Upstream error");
                        metrics::record_upstream_error(shape);
                    } else {
                        tracing::info!(request_id = %request_id, upstream = %upstream.url, error = %err, "Upstream asset missing");
                    }
                    err.into_response()
                }
            };
            (shape, response)
        }
    };

    metrics::record_request(shape, response.status().as_u16(), start_time);
    response
}
