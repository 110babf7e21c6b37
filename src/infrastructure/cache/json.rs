//! JSON-file backed module path cache
//!
//! Persists the module file set at `<tmp_dir>/module-paths.json` so the list
//! survives process restarts. Disk writes happen on a background thread.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use std::thread::JoinHandle;

use fs2::FileExt;

use crate::domain::entities::ModuleFileSet;
use crate::domain::ports::ModulePathCache;

/// File name used inside the build's tmp directory
pub const MODULE_PATHS_FILE: &str = "module-paths.json";

/// Module path cache mirrored to a JSON file
///
/// `set` updates the in-memory copy immediately and schedules the disk write
/// on its own thread. Each write persists the newest in-memory copy, so the
/// file converges on the last `set` regardless of thread scheduling.
pub struct JsonModulePathCache {
    path: PathBuf,
    current: Arc<RwLock<Option<ModuleFileSet>>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl JsonModulePathCache {
    /// Cache stored at `path`, starting from whatever the file already holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = load_from_disk(&path);
        Self {
            path,
            current: Arc::new(RwLock::new(current)),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Cache stored in the default file under `tmp_dir`
    pub fn in_dir(tmp_dir: &Path) -> Self {
        Self::open(tmp_dir.join(MODULE_PATHS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until every scheduled disk write has finished
    pub fn flush(&self) {
        let handles: Vec<_> = match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        };
        for handle in handles {
            let _ = handle.join();
        }
    }
}

impl ModulePathCache for JsonModulePathCache {
    fn set(&self, paths: ModuleFileSet) {
        match self.current.write() {
            Ok(mut guard) => *guard = Some(paths),
            Err(poisoned) => *poisoned.into_inner() = Some(paths),
        }

        let path = self.path.clone();
        let current = Arc::clone(&self.current);
        let spawned = std::thread::Builder::new()
            .name("module-path-cache".to_string())
            .spawn(move || {
                if let Err(e) = save_to_disk(&path, &current) {
                    tracing::warn!(file = %path.display(), error = %e, "failed to persist module paths");
                }
            });

        match spawned {
            Ok(handle) => {
                if let Ok(mut pending) = self.pending.lock() {
                    pending.retain(|h| !h.is_finished());
                    pending.push(handle);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not start module path writer, writing inline");
                if let Err(e) = save_to_disk(&self.path, &self.current) {
                    tracing::warn!(file = %self.path.display(), error = %e, "failed to persist module paths");
                }
            }
        }
    }

    fn get(&self) -> Option<ModuleFileSet> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

fn load_from_disk(path: &Path) -> Option<ModuleFileSet> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "ignoring corrupt module path cache");
            None
        }
    }
}

fn save_to_disk(path: &Path, current: &RwLock<Option<ModuleFileSet>>) -> std::io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let lock_file = fs::File::create(lock_path(path))?;
    lock_file.lock_exclusive()?;

    let snapshot = match current.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    let result = write_atomic(path, parent, &snapshot.unwrap_or_default());

    let _ = lock_file.unlock();
    result
}

/// Lock file serializing writers of `path`
///
/// It is left in place after each write. Removing it would let a writer that
/// already opened the old file and one that creates a new file hold the lock
/// at the same time.
fn lock_path(path: &Path) -> PathBuf {
    path.with_extension("lock")
}

fn write_atomic(path: &Path, dir: &Path, set: &ModuleFileSet) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(set)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
