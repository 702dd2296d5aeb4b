//! Repository implementations.
//!
//! # Repositories
//!
//! - [`LocalLinkRepository`] - Short link storage on top of a [`crate::infrastructure::storage::KeyValueStore`]

mod local_link_repository;

pub use local_link_repository::{LocalLinkRepository, STORAGE_KEY};
