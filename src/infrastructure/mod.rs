//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - Key-value persistence (file and in-memory)
//! - [`persistence`] - Repository implementations on top of [`storage`]
//! - [`clicks`] - Click ingestion backends
//! - [`logging`] - Event log sinks

pub mod clicks;
pub mod logging;
pub mod persistence;
pub mod storage;
