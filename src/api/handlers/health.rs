//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Stored links readable
/// - **503 Service Unavailable**: Storage unreachable or the stored links
///   cannot be read back
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Stored links readable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    if !state.store.health_check().await {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("Storage unreachable".to_string()),
        };
    }

    match state.link_service.list_links().await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Stored links readable".to_string()),
        },
        Err(e) => {
            tracing::warn!("Health check could not read stored links: {}", e);
            CheckStatus {
                status: "error".to_string(),
                message: Some("Stored links unreadable".to_string()),
            }
        }
    }
}
