//! InputFileSystem port - the bundler's read-side view of the disk
//!
//! Bundlers only ever read their inputs through this trait, which lets the
//! build worker swap the default implementation for an overlay that serves
//! transpiled sources from memory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Content could not be parsed as JSON
    InvalidJson { path: PathBuf, message: String },
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, keeping the path that triggered it
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    /// True for a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::InvalidJson { path, message } => {
                write!(f, "Invalid JSON in {}: {}", path.display(), message)
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Kind of file system node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
}

/// Metadata returned by [`InputFileSystem::stat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileStat {
    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }
}

/// Read-only file system used by a bundler to load its inputs
///
/// Implementations:
/// - `DiskFs` - pass-through to the local disk
/// - `InMemoryFileSystem` - serves transpiled sources, delegates the rest
///
/// Reads may be issued from several threads at once, hence `Send + Sync`.
pub trait InputFileSystem: Send + Sync {
    /// Read the full content of a file
    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file metadata, following symbolic links
    fn stat(&self, path: &Path) -> FsResult<FileStat>;

    /// List the entry names of a directory, sorted
    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Resolve a symbolic link
    fn read_link(&self, path: &Path) -> FsResult<PathBuf>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }

    /// Read a file and parse it as JSON
    ///
    /// Built on `read_file` so that decorators overriding `read_file` are
    /// honoured here as well.
    fn read_json(&self, path: &Path) -> FsResult<serde_json::Value> {
        let bytes = self.read_file(path)?;
        serde_json::from_slice(&bytes).map_err(|e| FsError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Drop any cached metadata for the given paths (all when `None`)
    fn purge(&self, _paths: Option<&[PathBuf]>) {}
}
