//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::domain::entities::ClickMetadata;
use crate::error::AppError;
use crate::state::AppState;

/// Seconds the failure notice stays up before navigating home.
const NOTICE_REFRESH_SECONDS: u32 = 3;

/// Page shown when an alias cannot be resolved.
///
/// Renders `templates/notice.html` with the failure message and a refresh to
/// the home URL.
#[derive(Template, WebTemplate)]
#[template(path = "notice.html")]
pub struct NoticeTemplate {
    pub message: String,
    pub home: String,
    pub refresh: u32,
}

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the original URL while the link is live
/// - **400** for a blank alias, **404** for an unknown one, **410** once the
///   link has expired
///
/// Failures render a short HTML notice with the reason and a refresh to the
/// configured home URL. Storage errors fall through to the JSON error body.
///
/// Every successful redirect is reported to the click backend. Recording
/// failures are logged and never affect the redirect.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match state.resolver.resolve(&alias).await {
        Ok(target) => {
            let location = location_header(&target)?;
            record_click(&state, &alias, &headers).await;
            Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
        }
        Err(err) if err.is_resolution_failure() => Ok(failure_notice(&err, &state.home_url)),
        Err(err) => Err(err),
    }
}

/// Builds the `Location` value, percent-encoding non-ASCII targets.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    let verbatim = target
        .is_ascii()
        .then(|| HeaderValue::from_str(target).ok())
        .flatten();

    verbatim
        .or_else(|| {
            Url::parse(target)
                .ok()
                .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        })
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL is not a usable redirect target",
                json!({ "url": target }),
            )
        })
}

async fn record_click(state: &AppState, alias: &str, headers: &HeaderMap) {
    if let Err(e) = state
        .click_ingestion
        .record_click(alias, click_metadata(headers))
        .await
    {
        tracing::warn!("Failed to record click for '{}': {}", alias, e);
    }
}

/// The referrer's host is the click source; visits without one are `Direct`.
fn click_metadata(headers: &HeaderMap) -> ClickMetadata {
    let source = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| Url::parse(referer).ok())
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "Direct".to_string());

    ClickMetadata {
        source,
        location: "unknown".to_string(),
    }
}

fn failure_notice(err: &AppError, home_url: &str) -> Response {
    let notice = NoticeTemplate {
        message: err.to_string(),
        home: home_url.to_string(),
        refresh: NOTICE_REFRESH_SECONDS,
    };

    (err.status(), notice).into_response()
}
