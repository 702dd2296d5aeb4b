//! Key-value persistence backing the shortlink store.
//!
//! Provides a [`KeyValueStore`] trait with two implementations:
//! - [`FileStore`] - Production store, one JSON file per key
//! - [`MemoryStore`] - Process-local store for tests and tooling

mod file_store;
mod memory_store;
mod service;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use service::{KeyValueStore, StorageError, StorageResult};
