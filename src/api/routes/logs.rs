//! Log Routes
//!
//! Endpoints for listing and fetching log records.
//!
//! - GET /logs - List records with optional filters and pagination
//! - GET /logs/:id - Get a specific record by id

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LogsParams, LogsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::query::{paginate, validate_time_range, LogFilter};
use crate::store::LogRecord;

/// GET /logs
///
/// List log records matching the optional filters, one page at a time.
/// Timestamps and the time range are validated before any filtering.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogsParams>,
) -> ApiResult<Json<LogsResponse>> {
    let page = validate_page(params.page)?;
    let page_size = validate_page_size(&state, params.page_size)?;
    let filter = build_filter(&params)?;

    let snapshot = state.store.snapshot().await;
    let matches = filter.apply(snapshot.records());

    let (slice, total_pages) = paginate(&matches, page, page_size);

    Ok(Json(LogsResponse {
        total: matches.len(),
        page,
        page_size,
        total_pages,
        logs: slice.iter().map(|&r| r.clone()).collect(),
    }))
}

/// GET /logs/:id
///
/// Exact-match lookup via the store's identifier index.
pub async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(log_id): Path<String>,
) -> ApiResult<Json<LogRecord>> {
    let snapshot = state.store.snapshot().await;

    let record = snapshot
        .get(&log_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Log entry with ID '{}' not found", log_id)))?;

    Ok(Json(record))
}

/// Turn the raw query parameters into a validated filter
pub(crate) fn build_filter(params: &LogsParams) -> ApiResult<LogFilter> {
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
    if let Some(level) = &params.level {
        filter = filter.level(level);
    }
    if let Some(component) = &params.component {
        filter = filter.component(component);
    }
    if let Some(start) = start {
        filter = filter.start(start);
    }
    if let Some(end) = end {
        filter = filter.end(end);
    }

    Ok(filter)
}

fn validate_page(page: Option<usize>) -> ApiResult<usize> {
    let page = page.unwrap_or(1);
    if page < 1 {
        return Err(ApiError::Validation("page must be at least 1".to_string()));
    }
    Ok(page)
}

/// Resolve page_size: default from config, values above the cap are
/// silently clamped, values below 1 are rejected.
fn validate_page_size(state: &AppState, page_size: Option<usize>) -> ApiResult<usize> {
    let page_size = page_size.unwrap_or(state.config.default_page_size);
    if page_size < 1 {
        return Err(ApiError::Validation(
            "page_size must be at least 1".to_string(),
        ));
    }
    Ok(page_size.min(state.config.max_page_size))
}
