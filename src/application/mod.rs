//! Application layer services implementing business logic.
//!
//! Services validate input, apply the link lifecycle rules, and coordinate
//! repository calls. HTTP handlers and the admin CLI only talk to this layer.
//!
//! # Available Services
//!
//! - [`services::validator::Validator`] - Submission checks and error messages
//! - [`services::alias_generator`] - Custom alias checks and random alias retry
//! - [`services::link_service::LinkService`] - Batch shortening and lookup
//! - [`services::resolver::Resolver`] - Alias to redirect target
//! - [`services::stats_service::StatsService`] - Per-link statistics

pub mod services;
