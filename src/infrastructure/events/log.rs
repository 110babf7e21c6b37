//! Event sink that reports build events through `tracing`

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Logs every build event at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl BuildEventSink for LogEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::FileChange { path } => {
                tracing::info!(path = %path.display(), "bundle written");
            }
        }
    }
}
