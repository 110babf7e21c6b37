//! FileEventKind value object - what happened to a watched path

use serde::{Deserialize, Serialize};

/// Kind of file-system event that triggered an incremental build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileEventKind {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "change")]
    Change,
    #[serde(rename = "unlink")]
    Unlink,
    #[serde(rename = "addDir")]
    AddDir,
    #[serde(rename = "unlinkDir")]
    UnlinkDir,
}

impl FileEventKind {
    /// Event name as reported by file watchers
    pub fn as_str(&self) -> &'static str {
        match self {
            FileEventKind::Add => "add",
            FileEventKind::Change => "change",
            FileEventKind::Unlink => "unlink",
            FileEventKind::AddDir => "addDir",
            FileEventKind::UnlinkDir => "unlinkDir",
        }
    }

    /// Returns true for events on directories
    pub fn is_dir(&self) -> bool {
        matches!(self, FileEventKind::AddDir | FileEventKind::UnlinkDir)
    }
}

impl std::fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(FileEventKind::Add),
            "change" => Ok(FileEventKind::Change),
            "unlink" => Ok(FileEventKind::Unlink),
            "addDir" => Ok(FileEventKind::AddDir),
            "unlinkDir" => Ok(FileEventKind::UnlinkDir),
            other => Err(format!("unknown file event '{}'", other)),
        }
    }
}
