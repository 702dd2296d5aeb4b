//! Absolute URL checks for submitted links.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlCheckError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute URL with a scheme and a non-empty host.
///
/// Surrounding whitespace is ignored. The URL is not rewritten; callers keep
/// the user's spelling and only use the parse result as a check.
///
/// # Errors
///
/// - [`UrlCheckError::Empty`] for blank input
/// - [`UrlCheckError::InvalidFormat`] for relative or malformed input
/// - [`UrlCheckError::MissingHost`] for host-less URLs such as `mailto:` or `file:///`
///
/// # Examples
///
/// ```ignore
/// assert!(parse_absolute_url("https://example.com/path").is_ok());
/// assert!(parse_absolute_url("not-a-url").is_err());
/// assert!(parse_absolute_url("javascript:alert(1)").is_err());
/// ```
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlCheckError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlCheckError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlCheckError::MissingHost),
    }
}
