//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs accept any field values. Checks happen in
//! [`crate::application::services::Validator`].

pub mod health;
pub mod shorten;
pub mod stats;
