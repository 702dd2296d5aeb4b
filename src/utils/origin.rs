//! Serving origin detection and short URL rendering.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Determines the origin short URLs are rendered against.
///
/// A configured `public_base_url` always wins. Otherwise the origin is built
/// from the request's `Host` header, so links point back at whatever address
/// the client used to reach the service. The port is kept.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing, not valid UTF-8, or contains characters that do
/// not belong in a host.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// assert_eq!(request_origin(&headers, None).unwrap(), "http://localhost:3000");
/// assert_eq!(request_origin(&headers, Some("https://s.example.com/")).unwrap(), "https://s.example.com");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    public_base_url: Option<&str>,
) -> Result<String, AppError> {
    if let Some(base) = public_base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?
        .trim();

    let well_formed = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':' | '[' | ']'));

    if !well_formed {
        return Err(AppError::bad_request("Invalid Host header"));
    }

    Ok(format!("http://{}", host))
}

/// Joins an origin and an alias into a short URL.
pub fn short_url(origin: &str, alias: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), alias)
}
