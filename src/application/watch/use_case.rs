//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::{BuildOptions, BuildUseCase};
use crate::config::BuildContext;
use crate::domain::value_objects::FileEventKind;
use crate::error::WatchError;
use crate::infrastructure::manifest::load_transpiled_manifest;

use super::event::{classify, WatchEvent, WatchOptions, WatcherState};

/// Watch Use Case
///
/// Rebuilds the bundle whenever the watched directory changes.
/// This is the main entry point for the `bundle-overlay watch` command.
pub struct WatchUseCase {
    build: BuildUseCase,
    build_options: BuildOptions,
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(build: BuildUseCase, build_options: BuildOptions, options: WatchOptions) -> Self {
        Self {
            build,
            build_options,
            options,
        }
    }

    /// Start watching (blocking)
    ///
    /// Runs one full build, then rebuilds after every debounced batch of
    /// changes until the running flag is cleared. Build failures are reported
    /// through `on_event` and do not stop the watcher.
    pub fn start<F>(
        &self,
        context: &mut BuildContext,
        running: Arc<AtomicBool>,
        on_event: F,
    ) -> Result<(), WatchError>
    where
        F: Fn(WatchEvent),
    {
        let watch_dir = self.options.watch_dir.clone();
        on_event(WatchEvent::WatchStarted {
            watching: watch_dir.display().to_string(),
        });

        self.rebuild(context, None, &on_event);

        let (tx, rx) = channel::<(PathBuf, EventKind)>();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for path in event.paths {
                        let _ = tx.send((path, event.kind));
                    }
                }
                Err(e) => tracing::warn!("file watcher error: {}", e),
            },
            Config::default(),
        )
        .map_err(|source| WatchError::Notify {
            path: watch_dir.clone(),
            source,
        })?;

        watcher
            .watch(&watch_dir, RecursiveMode::Recursive)
            .map_err(|source| WatchError::Notify {
                path: watch_dir.clone(),
                source,
            })?;

        // notify may replay events for existing files right after registration
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok((path, kind)) = rx.recv_timeout(Duration::from_millis(50)) {
                // Our own output must not trigger another build
                if !path.starts_with(&context.build_dir) {
                    if let Some(kind) = classify(&kind, &path) {
                        state.add_change(path, kind);
                    }
                }
            }

            if state.should_build() {
                let trigger = state.latest().cloned();
                for (path, kind) in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        kind,
                        path: path.display().to_string(),
                    });
                }
                self.rebuild(context, trigger, &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Run one build and report its outcome; returns whether it succeeded
    ///
    /// With a trigger the build goes through `build_incremental`.
    pub fn rebuild(
        &self,
        context: &mut BuildContext,
        trigger: Option<(FileEventKind, PathBuf)>,
        on_event: &impl Fn(WatchEvent),
    ) -> bool {
        if let Some(manifest) = &self.options.transpiled_manifest {
            match load_transpiled_manifest(manifest) {
                Ok(files) => context.ts_files = files,
                Err(e) => {
                    on_event(WatchEvent::Error {
                        message: e.to_string(),
                    });
                    return false;
                }
            }
        }

        let result = match trigger {
            Some((kind, path)) => {
                self.build
                    .build_incremental(kind, &path, context, &self.build_options)
            }
            None => self.build.build(context, &self.build_options),
        };

        match result {
            Ok(dest) => {
                on_event(WatchEvent::BuildComplete {
                    output: dest.display().to_string(),
                });
                true
            }
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                false
            }
        }
    }
}
