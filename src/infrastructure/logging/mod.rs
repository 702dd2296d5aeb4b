//! Event log sinks.

mod tracing_log;

pub use tracing_log::TracingEventLog;
