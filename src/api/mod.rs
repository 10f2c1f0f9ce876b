//! Loglens REST API
//!
//! HTTP API layer for loglens, built with Axum. This is the boundary
//! layer: it validates request parameters before invoking the core and
//! translates results and errors to the wire format.
//!
//! # Endpoints
//!
//! ## Logs
//! - `GET /logs` - List records with optional filters and pagination
//! - `GET /logs/stats` - Aggregated statistics
//! - `GET /logs/:id` - Get a record by id
//! - `POST /logs/reload` - Rebuild the store from disk
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//! - `GET /` - Service info
//!
//! # Example
//!
//! ```rust,ignore
//! use loglens::api::{serve, ApiConfig, AppState};
//! use loglens::store::LogStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, _report) = LogStore::open("./logs")?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(Arc::new(store), config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::health::service_info))
        // Log routes; the static /logs/stats segment must be registered
        // alongside the :id capture (axum prefers the static match)
        .route("/logs", get(routes::logs::list_logs))
        .route("/logs/stats", get(routes::stats::get_stats))
        .route("/logs/reload", post(routes::reload::reload_logs))
        .route("/logs/:id", get(routes::logs::get_log))
        // Health routes
        .route("/health/live", get(routes::health::liveness))
        .route("/health/ready", get(routes::health::readiness))
        .route("/health", get(routes::health::full_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Loglens API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Loglens API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
