//! Repository trait for short link storage.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface owning the collection of short links.
///
/// Links are only ever added; nothing is updated or removed, and expiry is
/// not interpreted here so that statistics can still see expired entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::LocalLinkRepository`] - key-value backed implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a single new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateAlias`] if the alias is already stored.
    /// Returns [`AppError::Storage`] on persistence errors.
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, AppError>;

    /// Stores a batch of links, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateAlias`] if any alias is already stored or
    /// appears twice in `links`; in that case nothing is written.
    /// Returns [`AppError::Storage`] on persistence errors.
    async fn insert_all(&self, links: Vec<ShortLink>) -> Result<Vec<ShortLink>, AppError>;

    /// Finds a link by exact alias match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found, expired or not
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on persistence errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists every stored link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on persistence errors.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;
}
