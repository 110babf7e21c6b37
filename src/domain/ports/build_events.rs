//! Build Event Port
//!
//! Notifications published by the build worker. Downstream steps (live
//! reload, copy tasks) subscribe through a `BuildEventSink`.

use std::path::PathBuf;

/// Event emitted by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// A build output was (re)written
    FileChange { path: PathBuf },
}

/// Trait for receiving build events
///
/// Implementations:
/// - JsonEventSink: NDJSON event stream for CI
/// - LogEventSink: routes events through `tracing`
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
