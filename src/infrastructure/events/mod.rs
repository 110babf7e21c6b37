//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - LogEventSink: human-readable lines via `tracing`

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::LogEventSink;
