//! Click records attached to a short link.

use chrono::{DateTime, Utc};

/// A single observed visit of a short link.
///
/// Records are produced by a [`crate::domain::repositories::ClickIngestion`]
/// backend. Nothing in the crate fabricates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRecord {
    pub alias: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl ClickRecord {
    pub fn new(alias: String, timestamp: DateTime<Utc>, metadata: ClickMetadata) -> Self {
        Self {
            alias,
            timestamp,
            source: metadata.source,
            location: metadata.location,
        }
    }
}

/// Visit details supplied when a click is recorded.
///
/// The timestamp is assigned by the ingestion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickMetadata {
    /// Where the visitor came from, e.g. a referrer host or `"Direct"`.
    pub source: String,
    pub location: String,
}
