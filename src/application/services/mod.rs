//! Business logic services for the application layer.

pub mod alias_generator;
pub mod link_service;
pub mod resolver;
pub mod stats_service;
pub mod validator;

pub use link_service::LinkService;
pub use resolver::Resolver;
pub use stats_service::{LinkSummary, StatsService};
pub use validator::Validator;
