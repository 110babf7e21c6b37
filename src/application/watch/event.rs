//! Watch event types and options

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::EventKind;

use crate::domain::value_objects::FileEventKind;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory to watch (usually the context's `src_dir`)
    pub watch_dir: PathBuf,
    /// Transpiled manifest re-read before every rebuild
    pub transpiled_manifest: Option<PathBuf>,
}

impl WatchOptions {
    pub fn new(watch_dir: impl Into<PathBuf>) -> Self {
        Self {
            watch_dir: watch_dir.into(),
            transpiled_manifest: None,
        }
    }

    /// Reload transpiled sources from `manifest` before each build
    pub fn with_transpiled_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.transpiled_manifest = Some(manifest.into());
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { watching: String },
    /// Source file changed
    FileChanged { kind: FileEventKind, path: String },
    /// Bundle rebuilt
    BuildComplete { output: String },
    /// Build or reload failed; watching continues
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Map a `notify` event onto the watcher event vocabulary
///
/// Renames report the old path as `unlink` and the new one as `add`, decided
/// by whether the path still exists. Access and unclassified events are
/// dropped.
pub fn classify(kind: &EventKind, path: &Path) -> Option<FileEventKind> {
    match kind {
        EventKind::Create(CreateKind::Folder) => Some(FileEventKind::AddDir),
        EventKind::Create(_) => Some(if path.is_dir() {
            FileEventKind::AddDir
        } else {
            FileEventKind::Add
        }),
        EventKind::Modify(ModifyKind::Name(_)) => Some(if path.is_dir() {
            FileEventKind::AddDir
        } else if path.exists() {
            FileEventKind::Add
        } else {
            FileEventKind::Unlink
        }),
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(_) => Some(FileEventKind::Change),
        EventKind::Remove(RemoveKind::Folder) => Some(FileEventKind::UnlinkDir),
        EventKind::Remove(_) => Some(FileEventKind::Unlink),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
    }
}

/// Watcher state for debouncing
///
/// Changes to the same path inside one debounce window collapse into the
/// latest event kind.
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: BTreeMap<PathBuf, FileEventKind>,
    latest: Option<(FileEventKind, PathBuf)>,
    last_change: Option<Instant>,
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf, kind: FileEventKind) {
        self.pending_changes.insert(path.clone(), kind);
        self.latest = Some((kind, path));
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_build(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending_changes.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
        } else {
            false
        }
    }

    /// Most recent change of the pending batch
    pub fn latest(&self) -> Option<&(FileEventKind, PathBuf)> {
        self.latest.as_ref()
    }

    /// Take all pending changes sorted by path, resetting state
    pub fn take_changes(&mut self) -> Vec<(PathBuf, FileEventKind)> {
        let changes = std::mem::take(&mut self.pending_changes).into_iter().collect();
        self.latest = None;
        self.last_change = None;
        changes
    }
}
