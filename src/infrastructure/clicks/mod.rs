//! Click ingestion backends.
//!
//! Only [`NullClickIngestion`] ships with the crate; visits are not captured.

mod null_clicks;

pub use null_clicks::NullClickIngestion;
