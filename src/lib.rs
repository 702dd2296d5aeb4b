//! # SnapURL
//!
//! A shortlink lifecycle engine: batch shortening with optional custom
//! aliases and per-link validity, alias resolution with expiry, and
//! per-link statistics, served over Axum with a file-backed key-value store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, and the event log
//! - **Application Layer** ([`application`]) - Validation, alias assignment, resolution, statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Key-value stores, persistence, logging
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Lifecycle
//!
//! A link is created by a submission of up to five URLs, resolves with a
//! temporary redirect until its expiry, and afterwards answers with an
//! "expired" notice. Links are never deleted.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_DIR="./data"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"urls":[{"url":"https://example.com","validity":60}]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Resolver, StatsService, Validator};
    pub use crate::domain::entities::{RawShortenRequest, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, ServiceOptions};
}
