//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes, plus
//! the service-info root endpoint.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status
//! - GET / - Service name, version, endpoint map

use axum::{extract::State, http::StatusCode, Json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{HealthResponse, InfoResponse};
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. The store is populated synchronously
/// before the server starts listening, so readiness equals liveness.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with record count and uptime.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.store.snapshot().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        total_logs_loaded: snapshot.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /
///
/// API root endpoint with service information.
pub async fn service_info() -> Json<InfoResponse> {
    let endpoints: HashMap<String, String> = [
        (
            "GET /logs",
            "Retrieve log entries with optional filtering and pagination",
        ),
        ("GET /logs/stats", "Get statistics about logs"),
        ("GET /logs/{log_id}", "Get a specific log entry by ID"),
        ("POST /logs/reload", "Reload log files from disk"),
        ("GET /health", "Health check"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(InfoResponse {
        name: "Log File Data Access and Analysis API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "REST API for reading, parsing, and analyzing log files".to_string(),
        endpoints,
    })
}
