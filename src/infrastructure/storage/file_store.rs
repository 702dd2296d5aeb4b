//! File-backed key-value store.

use super::service::{KeyValueStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tokio::fs;

/// A key-value store that keeps each key in its own JSON file.
///
/// Key `shortenedUrls` lives at `<root>/shortenedUrls.json`. Every write goes
/// to its own uniquely named hidden file in the same directory, is flushed to
/// disk, and is then renamed over the target, so readers observe either the
/// previous or the new value and never a partial one.
///
/// # Concurrency
///
/// Concurrent writers never share a temporary file. Two processes sharing one
/// data directory can still race on read-modify-write sequences; the last
/// rename wins.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .await
            .map_err(|source| StorageError::Io {
                key: root.display().to_string(),
                source,
            })?;

        tracing::info!("File store opened at {}", root.display());

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key to its file, rejecting anything that could escape the root.
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let well_formed = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !well_formed {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let root = self.root.clone();
        let prefix = format!(".{key}.");
        let value = value.to_owned();

        tokio::task::spawn_blocking(move || write_atomically(&root, &prefix, &path, &value))
            .await
            .map_err(io::Error::other)
            .and_then(|written| written)
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    async fn health_check(&self) -> bool {
        match fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                tracing::warn!("File store root is not accessible: {}", e);
                false
            }
        }
    }
}

fn write_atomically(root: &Path, prefix: &str, path: &Path, value: &str) -> io::Result<()> {
    let mut tmp = Builder::new().prefix(prefix).suffix(".tmp").tempfile_in(root)?;
    tmp.write_all(value.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
