//! Submission validation.

use std::sync::Arc;

use crate::domain::entities::{RawShortenRequest, ShortenRequest};
use crate::domain::event_log::{EventCategory, EventLevel, EventLog};
use crate::error::AppError;
use crate::utils::alias::is_valid_alias;
use crate::utils::url_check::{UrlCheckError, parse_absolute_url};

/// Maximum number of URLs accepted in one submission.
pub const MAX_BATCH_SIZE: usize = 5;

/// Validity used when an entry does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Longest validity accepted, per entry or as the configured default: one year.
pub const MAX_VALIDITY_MINUTES: u32 = 525_600;

#[derive(Debug, PartialEq, Eq)]
enum ValidityError {
    NotNumeric,
    NotPositiveWhole,
    TooLong,
}

/// Checks submissions and turns raw entries into [`ShortenRequest`]s.
///
/// # Rules
///
/// - At most [`MAX_BATCH_SIZE`] entries, at least one
/// - `url`: required, absolute with scheme and host
/// - validity: optional; numeric, then a positive whole number of minutes
///   up to [`MAX_VALIDITY_MINUTES`]
/// - alias: optional; ASCII letters and digits only
///
/// Blank optional fields count as absent. Every entry is checked and every
/// violation is reported, labelled with the entry's 1-based position. A
/// single violation anywhere rejects the whole submission.
pub struct Validator {
    default_validity_minutes: u32,
    events: Arc<dyn EventLog>,
}

impl Validator {
    pub fn new(default_validity_minutes: u32, events: Arc<dyn EventLog>) -> Self {
        Self {
            default_validity_minutes,
            events,
        }
    }

    /// Validates a whole submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with every error message found. An
    /// oversized submission is rejected before any entry is looked at.
    pub fn validate_batch(
        &self,
        batch: &[RawShortenRequest],
    ) -> Result<Vec<ShortenRequest>, AppError> {
        if batch.len() > MAX_BATCH_SIZE {
            self.log(
                EventLevel::Warn,
                format!("Rejected submission of {} URLs", batch.len()),
            );
            return Err(AppError::bad_request(format!(
                "You can shorten at most {} URLs at once.",
                MAX_BATCH_SIZE
            )));
        }

        if batch.is_empty() {
            self.log(EventLevel::Error, "Submission contains no URLs".to_string());
            return Err(AppError::bad_request("At least one URL is required."));
        }

        let mut errors = Vec::new();
        let mut requests = Vec::with_capacity(batch.len());

        for (index, raw) in batch.iter().enumerate() {
            if let Some(request) = self.check_entry(index + 1, raw, &mut errors) {
                requests.push(request);
            }
        }

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        self.log(
            EventLevel::Info,
            "All inputs valid. Proceeding to shorten URLs".to_string(),
        );

        Ok(requests)
    }

    /// Checks one entry, appending its messages to `errors`.
    ///
    /// Returns the normalized request only if the entry has no violations.
    fn check_entry(
        &self,
        position: usize,
        raw: &RawShortenRequest,
        errors: &mut Vec<String>,
    ) -> Option<ShortenRequest> {
        let errors_before = errors.len();
        let url = raw.url.trim();

        match parse_absolute_url(url) {
            Ok(_) => {}
            Err(UrlCheckError::Empty) => {
                errors.push(format!("URL #{} is required.", position));
                self.log(EventLevel::Error, format!("URL #{} is missing", position));
            }
            Err(reason) => {
                errors.push(format!("URL #{} is invalid.", position));
                self.log(
                    EventLevel::Error,
                    format!("URL #{} is not a valid URL: {}", position, reason),
                );
            }
        }

        let mut validity_minutes = self.default_validity_minutes;
        if let Some(value) = non_blank(raw.validity_minutes.as_deref()) {
            match parse_validity(value) {
                Ok(minutes) => validity_minutes = minutes,
                Err(ValidityError::NotNumeric) => {
                    errors.push(format!("Validity for URL #{} must be a number.", position));
                    self.log(
                        EventLevel::Warn,
                        format!("Non-numeric validity in URL #{}", position),
                    );
                }
                Err(ValidityError::NotPositiveWhole) => {
                    errors.push(format!(
                        "Validity for URL #{} must be a positive whole number of minutes.",
                        position
                    ));
                    self.log(
                        EventLevel::Warn,
                        format!("Out-of-range validity in URL #{}", position),
                    );
                }
                Err(ValidityError::TooLong) => {
                    errors.push(format!(
                        "Validity for URL #{} must be at most {} minutes.",
                        position, MAX_VALIDITY_MINUTES
                    ));
                    self.log(
                        EventLevel::Warn,
                        format!("Validity above the limit in URL #{}", position),
                    );
                }
            }
        }

        let custom_alias = non_blank(raw.custom_alias.as_deref());
        if let Some(alias) = custom_alias
            && !is_valid_alias(alias)
        {
            errors.push(format!(
                "Shortcode for URL #{} must be alphanumeric.",
                position
            ));
            self.log(
                EventLevel::Warn,
                format!("Invalid shortcode format in URL #{}", position),
            );
        }

        if errors.len() > errors_before {
            return None;
        }

        Some(ShortenRequest {
            url: url.to_string(),
            validity_minutes,
            custom_alias: custom_alias.map(str::to_string),
        })
    }

    fn log(&self, level: EventLevel, message: String) {
        self.events.log(level, EventCategory::Component, &message);
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a validity value the way a form field is read: any finite decimal
/// number is numeric, but only whole numbers of at least one minute are usable.
fn parse_validity(value: &str) -> Result<u32, ValidityError> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidityError::NotNumeric)?;

    if !number.is_finite() {
        return Err(ValidityError::NotNumeric);
    }

    if number < 1.0 || number.fract() != 0.0 {
        return Err(ValidityError::NotPositiveWhole);
    }

    if number > f64::from(MAX_VALIDITY_MINUTES) {
        return Err(ValidityError::TooLong);
    }

    Ok(number as u32)
}
