//! No-op click ingestion.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{ClickMetadata, ClickRecord};
use crate::domain::repositories::ClickIngestion;
use crate::error::AppError;

/// A click backend that stores nothing.
///
/// Statistics built on top of it report zero clicks for every link. Swap in
/// a real [`ClickIngestion`] implementation to capture visits.
pub struct NullClickIngestion;

impl NullClickIngestion {
    pub fn new() -> Self {
        debug!("Using NullClickIngestion (click capture disabled)");
        Self
    }
}

impl Default for NullClickIngestion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickIngestion for NullClickIngestion {
    async fn record_click(&self, alias: &str, _metadata: ClickMetadata) -> Result<(), AppError> {
        debug!("Dropping click for '{}' (click capture disabled)", alias);
        Ok(())
    }

    async fn list_clicks(&self, _alias: &str) -> Result<Vec<ClickRecord>, AppError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recorded_clicks_are_not_listed() {
        let clicks = NullClickIngestion::new();

        clicks
            .record_click(
                "abc123",
                ClickMetadata {
                    source: "Direct".to_string(),
                    location: "unknown".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(clicks.list_clicks("abc123").await.unwrap().is_empty());
    }
}
