//! Per-link statistics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickRecord, ShortLink};
use crate::domain::repositories::{ClickIngestion, LinkRepository};
use crate::error::AppError;
use crate::utils::origin::short_url;

/// Statistics for one stored link.
#[derive(Debug, Clone)]
pub struct LinkSummary {
    pub link: ShortLink,
    /// Short URL rendered against the requesting origin.
    pub short_url: String,
    pub expired: bool,
    pub clicks: Vec<ClickRecord>,
}

impl LinkSummary {
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

/// Service building statistics reports from stored links and their clicks.
///
/// Expired links are included and flagged. Click lists come exclusively from
/// the configured [`ClickIngestion`] backend.
pub struct StatsService<L: LinkRepository, C: ClickIngestion + ?Sized> {
    link_repository: Arc<L>,
    click_ingestion: Arc<C>,
}

impl<L: LinkRepository, C: ClickIngestion + ?Sized> StatsService<L, C> {
    pub fn new(link_repository: Arc<L>, click_ingestion: Arc<C>) -> Self {
        Self {
            link_repository,
            click_ingestion,
        }
    }

    /// Summarizes every stored link in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on persistence errors, or whatever the
    /// click backend reports.
    pub async fn report(&self, origin: &str) -> Result<Vec<LinkSummary>, AppError> {
        self.report_at(origin, Utc::now()).await
    }

    /// Same as [`Self::report`] with expiry evaluated at `now`.
    pub async fn report_at(
        &self,
        origin: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<LinkSummary>, AppError> {
        let links = self.link_repository.list_all().await?;

        let mut summaries = Vec::with_capacity(links.len());
        for link in links {
            summaries.push(self.summarize(link, origin, now).await?);
        }

        Ok(summaries)
    }

    /// Summarizes a single link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this alias.
    pub async fn report_alias(&self, alias: &str, origin: &str) -> Result<LinkSummary, AppError> {
        let link = self
            .link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found(alias))?;

        self.summarize(link, origin, Utc::now()).await
    }

    async fn summarize(
        &self,
        link: ShortLink,
        origin: &str,
        now: DateTime<Utc>,
    ) -> Result<LinkSummary, AppError> {
        let clicks = self.click_ingestion.list_clicks(&link.alias).await?;

        Ok(LinkSummary {
            short_url: short_url(origin, &link.alias),
            expired: link.is_expired_at(now),
            clicks,
            link,
        })
    }
}
