//! Shorten requests before and after validation.

/// One entry of a submission exactly as the user typed it.
///
/// Blank optional fields are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawShortenRequest {
    pub url: String,
    pub validity_minutes: Option<String>,
    pub custom_alias: Option<String>,
}

impl RawShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_validity(mut self, minutes: impl Into<String>) -> Self {
        self.validity_minutes = Some(minutes.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }
}

/// A validated request, ready for alias assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    /// Absolute URL, trimmed of surrounding whitespace.
    pub url: String,
    /// Always at least 1.
    pub validity_minutes: u32,
    /// Alphanumeric alias chosen by the user, if any.
    pub custom_alias: Option<String>,
}
