//! Alias resolution for redirects.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::event_log::{EventCategory, EventLevel, EventLog};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Turns an alias from a visited path into its redirect target.
///
/// Resolution never writes. Expired links are reported as such rather than
/// as missing, so the caller can tell the user what happened.
pub struct Resolver<L: LinkRepository> {
    link_repository: Arc<L>,
    events: Arc<dyn EventLog>,
}

impl<L: LinkRepository> Resolver<L> {
    pub fn new(link_repository: Arc<L>, events: Arc<dyn EventLog>) -> Self {
        Self {
            link_repository,
            events,
        }
    }

    /// Resolves `alias` to the original URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidAlias`] if the alias is blank
    /// - [`AppError::NotFound`] if no link has this exact alias
    /// - [`AppError::Expired`] if the link's validity has run out
    /// - [`AppError::Storage`] on persistence errors
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.resolve_at(alias, Utc::now()).await
    }

    /// Same as [`Self::resolve`] evaluated at `now`.
    pub async fn resolve_at(&self, alias: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        if alias.trim().is_empty() {
            self.log(EventLevel::Error, "No shortcode provided in URL".to_string());
            return Err(AppError::InvalidAlias);
        }

        let Some(link) = self.link_repository.find_by_alias(alias).await? else {
            self.log(
                EventLevel::Warn,
                format!("Shortcode '{}' not matched", alias),
            );
            return Err(AppError::not_found(alias));
        };

        if link.is_expired_at(now) {
            self.log(EventLevel::Info, format!("Shortcode '{}' is expired", alias));
            return Err(AppError::Expired {
                alias: link.alias,
                expired_at: link.expires_at,
            });
        }

        self.log(
            EventLevel::Info,
            format!(
                "Redirecting to '{}' from shortcode '{}'",
                link.original_url, alias
            ),
        );

        Ok(link.original_url)
    }

    fn log(&self, level: EventLevel, message: String) {
        self.events.log(level, EventCategory::Page, &message);
    }
}
