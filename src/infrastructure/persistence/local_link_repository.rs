//! Key-value backed implementation of [`LinkRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::storage::{KeyValueStore, StorageError};

/// Key under which the whole link collection is stored.
pub const STORAGE_KEY: &str = "shortenedUrls";

/// Persisted shape of one link.
///
/// ```json
/// { "alias": "k3x9qa", "original": "https://example.com", "createdAt": "2026-10-19T10:00:00Z", "expiry": "2026-10-19T10:30:00Z" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLink {
    alias: String,
    original: String,
    created_at: DateTime<Utc>,
    expiry: DateTime<Utc>,
}

impl From<StoredLink> for ShortLink {
    fn from(stored: StoredLink) -> Self {
        Self {
            alias: stored.alias,
            original_url: stored.original,
            created_at: stored.created_at,
            expires_at: stored.expiry,
        }
    }
}

impl From<&ShortLink> for StoredLink {
    fn from(link: &ShortLink) -> Self {
        Self {
            alias: link.alias.clone(),
            original: link.original_url.clone(),
            created_at: link.created_at,
            expiry: link.expires_at,
        }
    }
}

/// Link repository storing the full collection as one JSON array.
///
/// Every insert reads the array, appends, and writes the whole array back.
/// Those read-modify-write cycles are serialized inside the process, so
/// concurrent requests never drop each other's links. Readers do not take the
/// lock; the store replaces values atomically.
pub struct LocalLinkRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl LocalLinkRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<ShortLink>, AppError> {
        let Some(raw) = self.store.get(STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };

        let stored: Vec<StoredLink> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: STORAGE_KEY.to_string(),
                source,
            })?;

        Ok(stored.into_iter().map(ShortLink::from).collect())
    }

    async fn save(&self, links: &[ShortLink]) -> Result<(), AppError> {
        let stored: Vec<StoredLink> = links.iter().map(StoredLink::from).collect();
        let raw = serde_json::to_string(&stored).map_err(|e| {
            AppError::internal(
                "Failed to serialize links",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.store.set(STORAGE_KEY, &raw).await?;
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for LocalLinkRepository {
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, AppError> {
        let mut inserted = self.insert_all(vec![link]).await?;
        inserted
            .pop()
            .ok_or_else(|| AppError::internal("Insert returned no link", json!({})))
    }

    async fn insert_all(&self, links: Vec<ShortLink>) -> Result<Vec<ShortLink>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        let mut taken: HashSet<&str> = collection.iter().map(|l| l.alias.as_str()).collect();

        for link in &links {
            if !taken.insert(link.alias.as_str()) {
                return Err(AppError::duplicate_alias(&link.alias));
            }
        }

        collection.extend(links.iter().cloned());
        self.save(&collection).await?;

        tracing::debug!(
            "Stored {} link(s), collection size {}",
            links.len(),
            collection.len()
        );

        Ok(links)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|link| link.alias == alias))
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        self.load().await
    }
}
