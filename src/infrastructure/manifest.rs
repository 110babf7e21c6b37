//! Transpiled manifest loading
//!
//! The transpile step that runs before bundling records its output in a JSON
//! manifest mapping each source path to the emitted JavaScript, either as
//! plain text or with its source map:
//!
//! ```json
//! {
//!   "/app/src/app/main.ts": "var x = 1;",
//!   "/app/src/app/util.ts": { "output": "var y = 2;", "map": null }
//! }
//! ```
//!
//! Relative keys are resolved against the manifest's directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::TsFile;
use crate::error::ConfigError;

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    Text(String),
    File(TsFile),
}

impl From<ManifestEntry> for TsFile {
    fn from(entry: ManifestEntry) -> Self {
        match entry {
            ManifestEntry::Text(output) => TsFile::new(output),
            ManifestEntry::File(file) => file,
        }
    }
}

/// Load a transpiled manifest into the shape kept on the build context
pub fn load_transpiled_manifest(path: &Path) -> Result<HashMap<PathBuf, TsFile>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let raw: HashMap<String, ManifestEntry> =
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let files = raw
        .into_iter()
        .map(|(key, file)| {
            let source = PathBuf::from(key);
            let source = if source.is_absolute() {
                source
            } else {
                base.join(source)
            };
            (source, TsFile::from(file))
        })
        .collect();

    Ok(files)
}
