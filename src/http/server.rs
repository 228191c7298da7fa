//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with the catch-all echo handler
//! - Wire up middleware (request ID, trace span, propagation)
//! - Serve on a listener until the shutdown trigger, then drain

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::echo::echo_handler;
use crate::lifecycle::shutdown;
use crate::observability::correlation::{self, UuidRequestId};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
}

/// The echo HTTP server.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            service_name: config.observability.service_name.into(),
        };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the axum router with the correlation middleware stack.
    fn build_router(state: AppState) -> Router {
        // ServiceBuilder applies layers top to bottom: the request ID is
        // set first so the trace span can pick it up, and it is propagated
        // onto the response last.
        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(correlation::make_span))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Serve on the given listener until the shutdown subscription fires,
    /// then stop accepting and let in-flight responses finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown::wait(&mut shutdown).await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
