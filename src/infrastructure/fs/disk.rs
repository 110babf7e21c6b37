//! Local disk implementation of the InputFileSystem port

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileKind, FileStat, FsError, FsResult, InputFileSystem};

/// Pass-through input file system reading straight from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl DiskFs {
    /// Create a new DiskFs instance
    pub fn new() -> Self {
        Self
    }
}

impl InputFileSystem for DiskFs {
    fn read_file(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        let meta = std::fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
        let kind = if meta.is_dir() {
            FileKind::Directory
        } else {
            FileKind::File
        };
        Ok(FileStat {
            kind,
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = std::fs::read_dir(path)
            .map_err(|e| FsError::from_io(e, path))?
            .map(|entry| {
                entry
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .map_err(|e| FsError::from_io(e, path))
            })
            .collect::<FsResult<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        std::fs::read_link(path).map_err(|e| FsError::from_io(e, path))
    }
}
