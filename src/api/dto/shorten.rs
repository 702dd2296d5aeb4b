//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{RawShortenRequest, ShortLink};
use crate::utils::origin::short_url;

/// Request to shorten up to five URLs at once.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub urls: Vec<UrlItem>,
}

/// One submitted entry, field values as typed into the form.
#[derive(Debug, Deserialize)]
pub struct UrlItem {
    #[serde(default)]
    pub url: String,

    /// Minutes of validity; a JSON string or number.
    #[serde(default)]
    pub validity: Option<Value>,

    /// Optional custom alias.
    #[serde(default, alias = "custom_alias")]
    pub shortcode: Option<String>,
}

impl From<UrlItem> for RawShortenRequest {
    fn from(item: UrlItem) -> Self {
        let validity_minutes = match item.validity {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };

        RawShortenRequest {
            url: item.url,
            validity_minutes,
            custom_alias: item.shortcode,
        }
    }
}

/// Links created by one submission, in submission order.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub items: Vec<ShortenedItem>,
}

/// What the user gets back for each shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenedItem {
    pub original: String,
    pub alias: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
}

impl ShortenedItem {
    pub fn from_link(link: ShortLink, origin: &str) -> Self {
        Self {
            short_url: short_url(origin, &link.alias),
            original: link.original_url,
            alias: link.alias,
            created_at: link.created_at,
            expiry: link.expires_at,
        }
    }
}
