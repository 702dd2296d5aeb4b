//! [`EventLog`] implementation on top of `tracing`.

use crate::domain::event_log::{EventCategory, EventLevel, EventLog};
use tracing::{debug, error, info, warn};

/// Forwards application events to the process-wide `tracing` subscriber.
///
/// Events are emitted under the `snapurl::events` target with the category as
/// a structured field. `fatal` has no `tracing` level of its own and is
/// emitted as `ERROR` with `fatal = true`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLog;

impl TracingEventLog {
    pub fn new() -> Self {
        Self
    }
}

impl EventLog for TracingEventLog {
    fn log(&self, level: EventLevel, category: EventCategory, message: &str) {
        let category = category.as_str();

        match level {
            EventLevel::Debug => debug!(target: "snapurl::events", category, "{}", message),
            EventLevel::Info => info!(target: "snapurl::events", category, "{}", message),
            EventLevel::Warn => warn!(target: "snapurl::events", category, "{}", message),
            EventLevel::Error => error!(target: "snapurl::events", category, "{}", message),
            EventLevel::Fatal => {
                error!(target: "snapurl::events", category, fatal = true, "{}", message)
            }
        }
    }
}
