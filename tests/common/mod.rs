#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snapurl::domain::entities::ShortLink;
use snapurl::domain::repositories::LinkRepository;
use snapurl::infrastructure::clicks::NullClickIngestion;
use snapurl::infrastructure::logging::TracingEventLog;
use snapurl::infrastructure::persistence::LocalLinkRepository;
use snapurl::infrastructure::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use snapurl::state::{AppState, ServiceOptions};
use std::sync::Arc;

pub const BASE_URL: &str = "http://s.example.com";
pub const HOME_URL: &str = "https://home.example.com/";

pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// State with a fixed public base URL, so requests need no `Host` header.
pub fn create_test_state(store: Arc<dyn KeyValueStore>) -> AppState {
    create_test_state_with(
        store,
        ServiceOptions {
            public_base_url: Some(BASE_URL.to_string()),
            home_url: HOME_URL.to_string(),
            ..ServiceOptions::default()
        },
    )
}

pub fn create_test_state_with(store: Arc<dyn KeyValueStore>, options: ServiceOptions) -> AppState {
    AppState::new(
        store,
        Arc::new(TracingEventLog::new()),
        Arc::new(NullClickIngestion::new()),
        options,
    )
}

pub async fn create_test_link(
    store: Arc<dyn KeyValueStore>,
    alias: &str,
    url: &str,
    created_at: DateTime<Utc>,
    validity_minutes: u32,
) -> ShortLink {
    LocalLinkRepository::new(store)
        .insert(ShortLink::new(
            alias.to_string(),
            url.to_string(),
            created_at,
            validity_minutes,
        ))
        .await
        .unwrap()
}

/// A store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::InvalidKey(key.to_string()))
    }

    async fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::InvalidKey(key.to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
