//! Handlers for link statistics.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::api::dto::stats::{LinkStatsItem, StatsListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::request_origin;

/// Lists statistics for every stored link, expired ones included.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     {
///       "alias": "k3x9qa",
///       "original": "https://example.com",
///       "short_url": "http://localhost:3000/k3x9qa",
///       "created_at": "2026-10-19T10:00:00Z",
///       "expiry": "2026-10-19T10:30:00Z",
///       "expired": false,
///       "total_clicks": 0,
///       "clicks": []
///     }
///   ]
/// }
/// ```
pub async fn stats_list_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsListResponse>, AppError> {
    let origin = request_origin(&headers, state.public_base_url.as_deref())?;

    let items: Vec<LinkStatsItem> = state
        .stats_service
        .report(&origin)
        .await?
        .into_iter()
        .map(LinkStatsItem::from)
        .collect();

    Ok(Json(StatsListResponse {
        total: items.len(),
        items,
    }))
}

/// Statistics for a single alias.
///
/// # Endpoint
///
/// `GET /api/stats/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this alias.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
    headers: HeaderMap,
) -> Result<Json<LinkStatsItem>, AppError> {
    let origin = request_origin(&headers, state.public_base_url.as_deref())?;

    let summary = state.stats_service.report_alias(&alias, &origin).await?;

    Ok(Json(summary.into()))
}
