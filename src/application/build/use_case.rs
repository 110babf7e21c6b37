//! Build Use Case
//!
//! The two entry points, `build` and `build_incremental`. Both refresh the
//! transpiled-source snapshot, run the worker and log the outcome.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::BuildContext;
use crate::domain::ports::{BuildEventSink, Bundler, NoopEventSink};
use crate::domain::value_objects::FileEventKind;
use crate::error::BuildResult;
use crate::logger::TaskLogger;

use super::options::BuildOptions;
use super::worker::build_worker;

/// Build use case - drives a bundler over the build context
pub struct BuildUseCase {
    bundler: Arc<dyn Bundler>,
    events: Arc<dyn BuildEventSink>,
}

impl BuildUseCase {
    pub fn new(bundler: Arc<dyn Bundler>) -> Self {
        Self {
            bundler,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report file-change events to `events`
    pub fn with_events(mut self, events: Arc<dyn BuildEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Full build
    ///
    /// `context` should come from [`BuildContext::generate`] so the
    /// `ionic_*_dir` overrides apply; this method does not regenerate it.
    pub fn build(&self, context: &mut BuildContext, options: &BuildOptions) -> BuildResult<PathBuf> {
        let logger = TaskLogger::new("bundle");
        self.run(logger, context, options)
    }

    /// Rebuild after a file-system event
    ///
    /// The event is only logged; the bundle is always rebuilt in full.
    pub fn build_incremental(
        &self,
        event: FileEventKind,
        changed_path: &Path,
        context: &mut BuildContext,
        options: &BuildOptions,
    ) -> BuildResult<PathBuf> {
        let logger = TaskLogger::new("bundle update");
        tracing::debug!(event = %event, path = %changed_path.display(), "rebuilding");
        self.run(logger, context, options)
    }

    fn run(
        &self,
        logger: TaskLogger,
        context: &mut BuildContext,
        options: &BuildOptions,
    ) -> BuildResult<PathBuf> {
        let snapshot = context.cache_transpiled_ts_files();
        tracing::debug!(files = snapshot.len(), "transpiled sources cached");

        match build_worker(context, options, self.bundler.as_ref(), self.events.as_ref()) {
            Ok(dest) => {
                logger.finish();
                Ok(dest)
            }
            Err(err) => Err(logger.fail(err)),
        }
    }
}
