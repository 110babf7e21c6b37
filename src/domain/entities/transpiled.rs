//! Transpiled sources - compiler output kept in memory for the bundler
//!
//! An upstream compile step turns TypeScript into JavaScript before each
//! build. The results live here, keyed by the absolute path of the original
//! source, so the bundler can read them without touching disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Text encoding used when handing cached content to the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

impl Encoding {
    /// Encode text into the bytes a file read would have returned
    ///
    /// Characters outside the Latin-1 range become `?`.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }
}

/// Output of the TypeScript compile step for one source file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TsFile {
    /// Transpiled JavaScript
    pub output: String,
    /// Source map, when the compile step produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

impl TsFile {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            map: None,
        }
    }
}

/// One cached source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspiledEntry {
    source_path: PathBuf,
    content: String,
    encoding: Encoding,
}

impl TranspiledEntry {
    pub fn new(source_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            content: content.into(),
            encoding: Encoding::Utf8,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Content as the bytes a disk read would produce
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encoding.encode(&self.content)
    }
}

/// Transpiled-source cache: absolute source path to transpiled text
///
/// Read-only while a build runs. Between builds the whole cache is replaced
/// by a fresh snapshot rather than edited in place.
#[derive(Debug, Clone, Default)]
pub struct TranspiledSourceCache {
    entries: HashMap<PathBuf, TranspiledEntry>,
}

impl TranspiledSourceCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from compile-step output
    pub fn from_ts_files(ts_files: &HashMap<PathBuf, TsFile>) -> Self {
        ts_files
            .iter()
            .map(|(path, file)| TranspiledEntry::new(path.clone(), file.output.clone()))
            .collect()
    }

    /// Insert an entry; a later insert for the same path wins
    pub fn insert(&mut self, entry: TranspiledEntry) -> Option<TranspiledEntry> {
        self.entries.insert(entry.source_path.clone(), entry)
    }

    /// Look up the cached entry for a path
    pub fn get(&self, path: &Path) -> Option<&TranspiledEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TranspiledEntry> for TranspiledSourceCache {
    fn from_iter<I: IntoIterator<Item = TranspiledEntry>>(iter: I) -> Self {
        let mut cache = Self::new();
        for entry in iter {
            cache.insert(entry);
        }
        cache
    }
}
