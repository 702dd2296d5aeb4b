//! Link creation and retrieval service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::alias_generator::assign_alias;
use crate::application::services::validator::Validator;
use crate::domain::entities::{RawShortenRequest, ShortLink};
use crate::domain::event_log::{EventCategory, EventLevel, EventLog};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for shortening submissions and reading links back.
///
/// A submission is validated as a whole, every entry gets an alias, and the
/// resulting links are stored in one repository call. Any failure leaves the
/// store untouched.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    validator: Validator,
    events: Arc<dyn EventLog>,
}

impl<L: LinkRepository> LinkService<L> {
    pub fn new(link_repository: Arc<L>, validator: Validator, events: Arc<dyn EventLog>) -> Self {
        Self {
            link_repository,
            validator,
            events,
        }
    }

    /// Shortens a submission of up to five URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any entry is invalid.
    /// Returns [`AppError::DuplicateAlias`] if a custom alias is taken.
    /// Returns [`AppError::AliasGenerationExhausted`] if no free alias was found.
    /// Returns [`AppError::Storage`] on persistence errors.
    pub async fn shorten_batch(
        &self,
        batch: &[RawShortenRequest],
    ) -> Result<Vec<ShortLink>, AppError> {
        self.shorten_batch_at(batch, Utc::now()).await
    }

    /// Same as [`Self::shorten_batch`] with an explicit creation time.
    ///
    /// All links of one submission share `now` as their creation time.
    pub async fn shorten_batch_at(
        &self,
        batch: &[RawShortenRequest],
        now: DateTime<Utc>,
    ) -> Result<Vec<ShortLink>, AppError> {
        let requests = self.validator.validate_batch(batch)?;

        let mut taken: HashSet<String> = self
            .link_repository
            .list_all()
            .await?
            .into_iter()
            .map(|link| link.alias)
            .collect();

        let mut links = Vec::with_capacity(requests.len());
        for request in requests {
            let alias = assign_alias(request.custom_alias.as_deref(), &taken)
                .inspect_err(|e| self.log_assignment_failure(e))?;

            taken.insert(alias.clone());
            links.push(ShortLink::new(
                alias,
                request.url,
                now,
                request.validity_minutes,
            ));
        }

        let stored = self.link_repository.insert_all(links).await?;

        for link in &stored {
            self.events.log(
                EventLevel::Info,
                EventCategory::Api,
                &format!(
                    "Shortened '{}' as '{}' until {}",
                    link.original_url,
                    link.alias,
                    link.expires_at.to_rfc3339()
                ),
            );
        }

        Ok(stored)
    }

    /// Retrieves a link by exact alias, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this alias.
    /// Returns [`AppError::Storage`] on persistence errors.
    pub async fn lookup_by_alias(&self, alias: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found(alias))
    }

    /// Lists every stored link in creation order.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.link_repository.list_all().await
    }

    fn log_assignment_failure(&self, error: &AppError) {
        let level = match error {
            AppError::DuplicateAlias { .. } => EventLevel::Warn,
            _ => EventLevel::Error,
        };
        self.events
            .log(level, EventCategory::Component, &error.to_string());
    }
}
