//! Domain layer containing business entities and collaborator contracts.
//!
//! The domain layer has no dependencies on the HTTP surface or on concrete
//! storage. It defines what a short link is and which capabilities the
//! services need; [`crate::infrastructure`] provides the implementations.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage and click-capture trait definitions
//! - [`event_log`] - Leveled event log collaborator
//!
//! # Lifecycle
//!
//! 1. A submission is validated and assigned aliases
//!    ([`crate::application::services::LinkService`])
//! 2. The resulting [`entities::ShortLink`]s are stored through
//!    [`repositories::LinkRepository`]
//! 3. Redirects resolve an alias and enforce expiry
//!    ([`crate::application::services::Resolver`])
//! 4. Reports combine stored links with [`repositories::ClickIngestion`] data

pub mod entities;
pub mod event_log;
pub mod repositories;
