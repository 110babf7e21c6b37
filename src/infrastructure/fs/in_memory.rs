//! In-memory overlay over a bundler's input file system
//!
//! Serves transpiled sources for every path in the transpiled-source cache and
//! forwards everything else to the wrapped file system untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::TranspiledSourceCache;
use crate::domain::ports::{FileStat, FsResult, InputFileSystem};

/// Decorator that answers content reads from the transpiled-source cache
///
/// Only content reads are intercepted. Metadata calls always go to the
/// wrapped file system: cached entries stand for files that still exist on
/// disk. A cache miss is never remembered, it simply delegates.
///
/// Bind a new overlay for every build so that a replaced cache snapshot is
/// picked up.
pub struct InMemoryFileSystem {
    inner: Arc<dyn InputFileSystem>,
    transpiled: Arc<TranspiledSourceCache>,
}

impl InMemoryFileSystem {
    pub fn new(inner: Arc<dyn InputFileSystem>, transpiled: Arc<TranspiledSourceCache>) -> Self {
        Self { inner, transpiled }
    }

    /// The wrapped file system
    pub fn inner(&self) -> &Arc<dyn InputFileSystem> {
        &self.inner
    }
}

impl InputFileSystem for InMemoryFileSystem {
    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>> {
        if let Some(entry) = self.transpiled.get(path) {
            tracing::trace!(path = %path.display(), "serving transpiled source from memory");
            return Ok(entry.to_bytes());
        }
        self.inner.read_file(path)
    }

    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        self.inner.stat(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        self.inner.read_dir(path)
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        self.inner.read_link(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn purge(&self, paths: Option<&[PathBuf]>) {
        self.inner.purge(paths)
    }
}
