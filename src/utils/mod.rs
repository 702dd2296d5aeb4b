//! Utility functions for alias handling, URL checks, and request handling.
//!
//! - [`alias`] - Alias generation and format checks
//! - [`url_check`] - Absolute URL parsing
//! - [`origin`] - Serving origin detection and short URL rendering

pub mod alias;
pub mod origin;
pub mod url_check;
