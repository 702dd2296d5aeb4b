//! Key-value store trait and error types.

use async_trait::async_trait;

/// Errors that can occur while reading or writing a stored value.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for key '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String-valued key-value persistence.
///
/// Values are opaque strings and are always replaced whole; there is no
/// partial update or merge. Callers that need read-modify-write semantics
/// must serialize those sequences themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileStore`] - one file per key under a data directory
/// - [`crate::infrastructure::storage::MemoryStore`] - process-local map, for tests and tooling
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been written under that key yet.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Checks that the backing storage is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
