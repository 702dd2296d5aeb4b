//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::validator::DEFAULT_VALIDITY_MINUTES;
use crate::application::services::{LinkService, Resolver, StatsService, Validator};
use crate::config::Config;
use crate::domain::event_log::EventLog;
use crate::domain::repositories::ClickIngestion;
use crate::infrastructure::persistence::LocalLinkRepository;
use crate::infrastructure::storage::KeyValueStore;

/// Settings the services and handlers need beyond their collaborators.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub default_validity_minutes: u32,
    /// Fixed origin for rendered short URLs; `None` uses the request's `Host`.
    pub public_base_url: Option<String>,
    /// Where a failed redirect sends the visitor.
    pub home_url: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            public_base_url: None,
            home_url: "/".to_string(),
        }
    }
}

impl From<&Config> for ServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            default_validity_minutes: config.default_validity_minutes,
            public_base_url: config.public_base_url.clone(),
            home_url: config.home_url.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<LocalLinkRepository>>,
    pub resolver: Arc<Resolver<LocalLinkRepository>>,
    pub stats_service: Arc<StatsService<LocalLinkRepository, dyn ClickIngestion>>,
    pub click_ingestion: Arc<dyn ClickIngestion>,
    pub store: Arc<dyn KeyValueStore>,
    pub public_base_url: Option<String>,
    pub home_url: String,
}

impl AppState {
    /// Wires the services on top of a key-value store and a click backend.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        events: Arc<dyn EventLog>,
        click_ingestion: Arc<dyn ClickIngestion>,
        options: ServiceOptions,
    ) -> Self {
        let link_repository = Arc::new(LocalLinkRepository::new(store.clone()));

        let validator = Validator::new(options.default_validity_minutes, events.clone());
        let link_service = Arc::new(LinkService::new(
            link_repository.clone(),
            validator,
            events.clone(),
        ));
        let resolver = Arc::new(Resolver::new(link_repository.clone(), events));
        let stats_service = Arc::new(StatsService::new(
            link_repository,
            click_ingestion.clone(),
        ));

        Self {
            link_service,
            resolver,
            stats_service,
            click_ingestion,
            store,
            public_base_url: options.public_base_url,
            home_url: options.home_url,
        }
    }
}
