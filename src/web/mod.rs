//! HTTP API for the service panel.
//!
//! ## Endpoints
//! - `GET /` - Dashboard page
//! - `GET /api/stats` - CPU, RAM and boot time
//! - `GET /api/services` - All service units with their status
//! - `GET /api/services/{name}/logs?lines=N` - Recent journal lines
//! - `POST /api/services/{name}/control` - `{"action": "start" | "stop" | "restart"}`
//!
//! Service names may contain slashes, so everything after `/api/services/`
//! is captured and the trailing `/logs` or `/control` is split off by the
//! handler.

use anyhow::Context;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::manager::ServiceManager;

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;

type SharedManager = Arc<ServiceManager>;

/// Build the application router around a service manager
pub fn router(manager: SharedManager) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/stats", get(handlers::stats))
        .route("/api/services", get(handlers::list_services))
        .route(
            "/api/services/{*path}",
            get(handlers::service_logs).post(handlers::control_service),
        )
        .with_state(manager)
        .layer(middleware::from_fn(log_requests))
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &Config, manager: SharedManager) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Svcpanel listening on http://{}", addr);

    axum::serve(listener, router(manager))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Svcpanel stopped");
    Ok(())
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request"
    );
    response
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
