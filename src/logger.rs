//! Task timing logs
//!
//! Each entry point opens a [`TaskLogger`] and closes it with either
//! [`TaskLogger::finish`] or [`TaskLogger::fail`].

use std::fmt::Display;
use std::time::{Duration, Instant};

/// Logs the start and end of one named task
#[derive(Debug)]
pub struct TaskLogger {
    name: String,
    started: Instant,
}

impl TaskLogger {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::info!(task = %name, "{} started ...", name);
        Self {
            name,
            started: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record success and return the elapsed time
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        tracing::info!(
            task = %self.name,
            elapsed_ms = elapsed.as_millis() as u64,
            "{} finished in {} ms",
            self.name,
            elapsed.as_millis()
        );
        elapsed
    }

    /// Record failure and hand the error back to the caller
    pub fn fail<E: Display>(self, err: E) -> E {
        tracing::error!(
            task = %self.name,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "{} failed: {}",
            self.name,
            err
        );
        err
    }
}
