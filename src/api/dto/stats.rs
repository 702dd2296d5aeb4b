//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkSummary;
use crate::domain::entities::ClickRecord;

/// Statistics for every stored link.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub total: usize,
    pub items: Vec<LinkStatsItem>,
}

/// Statistics for one link, expired or not.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub alias: String,
    pub original: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub expired: bool,
    pub total_clicks: usize,
    pub clicks: Vec<ClickInfo>,
}

#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl From<ClickRecord> for ClickInfo {
    fn from(click: ClickRecord) -> Self {
        Self {
            timestamp: click.timestamp,
            source: click.source,
            location: click.location,
        }
    }
}

impl From<LinkSummary> for LinkStatsItem {
    fn from(summary: LinkSummary) -> Self {
        Self {
            total_clicks: summary.total_clicks(),
            alias: summary.link.alias,
            original: summary.link.original_url,
            short_url: summary.short_url,
            created_at: summary.link.created_at,
            expiry: summary.link.expires_at,
            expired: summary.expired,
            clicks: summary.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
