//! Reload Route
//!
//! Rebuilds the record store from disk on demand.
//!
//! - POST /logs/reload - Re-run ingestion and swap in the new generation

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ReloadResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /logs/reload
///
/// Re-ingest the log directory. In-flight reads finish on the previous
/// generation; the response reports what the load pass saw.
pub async fn reload_logs(State(state): State<Arc<AppState>>) -> ApiResult<Json<ReloadResponse>> {
    let report = state.store.reload().await?;

    tracing::info!(
        files = report.files_scanned,
        records = report.records_loaded,
        skipped_lines = report.lines_skipped,
        skipped_files = report.files_skipped,
        "log store reloaded"
    );

    Ok(Json(report.into()))
}
