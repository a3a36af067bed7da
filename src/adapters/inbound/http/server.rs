//! Listener setup and graceful shutdown for the HTTP service.

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::{middleware, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::middleware::request_logging_middleware;
use super::routes::create_router;
use super::state::AppState;
use crate::shared::error::AnalysisError;
use crate::shared::Result;

/// Everything needed to start the service
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    /// Single origin allowed by CORS, e.g. the visualization client
    pub allowed_origin: String,
    pub state: AppState,
}

/// Builds the router with access logging, request tracing and CORS layers
pub fn build_app(state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin: HeaderValue = allowed_origin.parse().map_err(|_| AnalysisError::Validation {
        message: format!("Invalid CORS origin: '{}'", allowed_origin),
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    Ok(create_router(state)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Serves until Ctrl+C or SIGTERM
pub async fn serve(settings: ServerSettings) -> Result<()> {
    let data_path = settings.state.data_path.clone();
    let app = build_app(settings.state, &settings.allowed_origin)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        address = %addr,
        data_file = %data_path.display(),
        allowed_origin = %settings.allowed_origin,
        version = env!("CARGO_PKG_VERSION"),
        "Attack path service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Attack path service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
