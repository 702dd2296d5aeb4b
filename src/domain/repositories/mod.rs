//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage
//! - [`ClickIngestion`] - Click capture and listing

pub mod click_ingestion;
pub mod link_repository;

pub use click_ingestion::ClickIngestion;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_ingestion::MockClickIngestion;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
