//! Leveled event log collaborator.
//!
//! Services report notable outcomes (validation failures, redirects, expired
//! links) through [`EventLog`] instead of writing to a concrete sink. Logging
//! is fire-and-forget: the trait method cannot fail, and implementations must
//! swallow their own errors.

use std::fmt;

/// Severity of a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl EventLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the system an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    /// Submission handling: validation and alias assignment.
    Component,
    /// Redirect resolution.
    Page,
    /// HTTP surface.
    Api,
}

impl EventCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Page => "page",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for leveled application events.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::TracingEventLog`] - forwards to `tracing`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait EventLog: Send + Sync {
    /// Records an event. Never blocks on I/O and never fails the caller.
    fn log(&self, level: EventLevel, category: EventCategory, message: &str);
}
