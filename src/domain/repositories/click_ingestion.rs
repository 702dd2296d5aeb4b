//! Extension point for real click capture.

use crate::domain::entities::{ClickMetadata, ClickRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Capability for recording and listing visits of short links.
///
/// The statistics report reads click lists exclusively through this trait.
/// The bundled backend ([`crate::infrastructure::clicks::NullClickIngestion`])
/// records nothing, so reports show zero clicks until a real backend is
/// plugged in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickIngestion: Send + Sync {
    /// Records one visit of `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Internal`] if the backend
    /// fails to persist the click.
    async fn record_click(&self, alias: &str, metadata: ClickMetadata) -> Result<(), AppError>;

    /// Lists recorded visits of `alias`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Internal`] on backend errors.
    async fn list_clicks(&self, alias: &str) -> Result<Vec<ClickRecord>, AppError>;
}
