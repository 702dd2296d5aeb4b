//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse, ShortenedItem};
use crate::domain::entities::RawShortenRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::origin::request_origin;

/// Shortens up to five URLs in one submission.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # All or Nothing
///
/// Every entry is validated first. If any entry fails, or any alias cannot be
/// assigned, nothing is stored and the whole submission is rejected.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "url": "https://example.com", "validity": 60, "shortcode": "Promo1" },
///     { "url": "https://example.org" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "original": "https://example.com",
///       "alias": "Promo1",
///       "short_url": "http://localhost:3000/Promo1",
///       "created_at": "2026-10-19T10:00:00Z",
///       "expiry": "2026-10-19T11:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 `validation_error`, with every message in `details.errors`
/// - 409 `duplicate_alias` if a custom alias is taken
/// - 500 `alias_generation_exhausted` if no free alias was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let origin = request_origin(&headers, state.public_base_url.as_deref())?;

    let batch: Vec<RawShortenRequest> = payload.urls.into_iter().map(Into::into).collect();

    let links = state.link_service.shorten_batch(&batch).await?;

    let items = links
        .into_iter()
        .map(|link| ShortenedItem::from_link(link, &origin))
        .collect();

    Ok(Json(ShortenResponse { items }))
}
