//! Core domain entities.
//!
//! Entities are plain data; the rules that act on them live in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A persisted alias → URL mapping with an expiry
//! - [`RawShortenRequest`] / [`ShortenRequest`] - A submission entry before and after validation
//! - [`ClickRecord`] - A visit of a short link

pub mod click;
pub mod short_link;
pub mod shorten_request;

pub use click::{ClickMetadata, ClickRecord};
pub use short_link::ShortLink;
pub use shorten_request::{RawShortenRequest, ShortenRequest};
