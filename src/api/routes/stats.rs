//! Stats Routes
//!
//! Aggregated statistics over the record set.
//!
//! - GET /logs/stats - Totals, per-level and per-component counts, time range

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{StatsParams, StatsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{compute_stats, validate_time_range, LogFilter};

/// GET /logs/stats
///
/// Compute statistics over records within the optional time range.
/// The range is validated before any filtering.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> ApiResult<Json<StatsResponse>> {
    let start = params
        .start_time
        .as_deref()
        .map(crate::query::parse_timestamp)
        .transpose()?;
    let end = params
        .end_time
        .as_deref()
        .map(crate::query::parse_timestamp)
        .transpose()?;

    validate_time_range(start, end)?;

    let mut filter = LogFilter::new();
    if let Some(start) = start {
        filter = filter.start(start);
    }
    if let Some(end) = end {
        filter = filter.end(end);
    }

    let snapshot = state.store.snapshot().await;
    let matches = filter.apply(snapshot.records());

    Ok(Json(compute_stats(&matches)))
}
