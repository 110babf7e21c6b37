//! ModulePathCache port - last known set of bundle inputs
//!
//! Other build steps (style sheets, copy tasks) consult this cache to decide
//! whether a file matters to the current bundle without re-running the bundler.
//! The cache is advisory: nothing about build correctness depends on it.

use std::path::{Path, PathBuf};

use crate::domain::entities::ModuleFileSet;

/// Storage for the module file set of the most recent successful bundle
pub trait ModulePathCache: Send + Sync {
    /// Replace the stored set
    ///
    /// Fire-and-forget: implementations may finish the write after returning,
    /// and callers never wait on it.
    fn set(&self, paths: ModuleFileSet);

    /// The most recently stored set, if any
    fn get(&self) -> Option<ModuleFileSet>;

    /// Whether the last bundle used `path`
    fn contains(&self, path: &Path) -> bool {
        self.get().is_some_and(|set| set.contains(path))
    }

    /// Stored paths as a plain list (empty when nothing was stored yet)
    fn paths(&self) -> Vec<PathBuf> {
        self.get().map(ModuleFileSet::into_vec).unwrap_or_default()
    }
}
