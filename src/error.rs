//! Application error type and its HTTP representation.
//!
//! Every failure the shortlink engine can produce is a variant of [`AppError`].
//! Handlers return it directly; [`IntoResponse`] turns it into the JSON envelope
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found.", "details": { "alias": "abc123" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::infrastructure::storage::StorageError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more submitted entries failed validation. Nothing was stored.
    #[error("{}", .messages.join(" "))]
    Validation { messages: Vec<String> },

    #[error("Alias '{alias}' is already in use.")]
    DuplicateAlias { alias: String },

    #[error("Could not generate a free alias after {attempts} attempts.")]
    AliasGenerationExhausted { attempts: usize },

    #[error("Invalid short URL.")]
    InvalidAlias,

    #[error("Short URL not found.")]
    NotFound { alias: String },

    #[error("This short URL has expired.")]
    Expired {
        alias: String,
        expired_at: DateTime<Utc>,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Single-message validation error, for request-level problems.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    pub fn duplicate_alias(alias: impl Into<String>) -> Self {
        Self::DuplicateAlias {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable error code used in API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::DuplicateAlias { .. } => "duplicate_alias",
            Self::AliasGenerationExhausted { .. } => "alias_generation_exhausted",
            Self::InvalidAlias => "invalid_alias",
            Self::NotFound { .. } => "not_found",
            Self::Expired { .. } => "expired",
            Self::Storage(_) => "storage_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidAlias => StatusCode::BAD_REQUEST,
            Self::DuplicateAlias { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::AliasGenerationExhausted { .. } | Self::Storage(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true for the failures a redirect attempt can end in.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidAlias | Self::NotFound { .. } | Self::Expired { .. }
        )
    }

    fn details(&self) -> Value {
        match self {
            Self::Validation { messages } => json!({ "errors": messages }),
            Self::DuplicateAlias { alias } | Self::NotFound { alias } => json!({ "alias": alias }),
            Self::AliasGenerationExhausted { attempts } => json!({ "attempts": attempts }),
            Self::InvalidAlias => json!({}),
            Self::Expired { alias, expired_at } => {
                json!({ "alias": alias, "expired_at": expired_at })
            }
            // Storage paths and parse positions stay in the server log.
            Self::Storage(_) => json!({}),
            Self::Internal { details, .. } => details.clone(),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let message = match self {
            Self::Storage(_) => "Storage unavailable".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details: self.details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
