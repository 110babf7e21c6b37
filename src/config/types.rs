//! Bundler configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Built-in defaults, overlaid key by key with the user's config file
pub const DEFAULT_BUNDLER_CONFIG: &str = r#"
devtool = "source-map"
entry = "{{SRC}}/app/main.ts"

[output]
path = "{{BUILD}}"
filename = "main.js"
"#;

/// Modules of one named entry chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryValue {
    Single(String),
    Multi(Vec<String>),
}

impl EntryValue {
    fn paths(&self) -> Vec<&str> {
        match self {
            EntryValue::Single(path) => vec![path.as_str()],
            EntryValue::Multi(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    fn try_map<E>(&self, f: &mut impl FnMut(&str) -> Result<String, E>) -> Result<Self, E> {
        Ok(match self {
            EntryValue::Single(path) => EntryValue::Single(f(path)?),
            EntryValue::Multi(paths) => {
                EntryValue::Multi(paths.iter().map(|p| f(p)).collect::<Result<_, _>>()?)
            }
        })
    }
}

/// Entry points of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryConfig {
    /// A single entry module
    Single(String),
    /// Several modules bundled as one entry
    Multi(Vec<String>),
    /// Named entry chunks, each one module or a list of modules
    Named(BTreeMap<String, EntryValue>),
}

impl EntryConfig {
    /// Every entry module path, in declaration order
    ///
    /// Named chunks are visited in name order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            EntryConfig::Single(path) => vec![path.as_str()],
            EntryConfig::Multi(paths) => paths.iter().map(String::as_str).collect(),
            EntryConfig::Named(map) => map.values().flat_map(EntryValue::paths).collect(),
        }
    }

    /// Apply `f` to every entry path
    pub fn try_map<E>(&self, mut f: impl FnMut(&str) -> Result<String, E>) -> Result<Self, E> {
        Ok(match self {
            EntryConfig::Single(path) => EntryConfig::Single(f(path)?),
            EntryConfig::Multi(paths) => {
                EntryConfig::Multi(paths.iter().map(|p| f(p)).collect::<Result<_, _>>()?)
            }
            EntryConfig::Named(map) => EntryConfig::Named(
                map.iter()
                    .map(|(name, value)| Ok((name.clone(), value.try_map(&mut f)?)))
                    .collect::<Result<_, E>>()?,
            ),
        })
    }
}

/// Where the bundle is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: String,
}

/// Resolved bundler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerConfig {
    #[serde(default)]
    pub devtool: String,

    pub entry: EntryConfig,

    pub output: OutputConfig,
}

impl BundlerConfig {
    /// Destination of the bundle: `output.path` joined with `output.filename`
    pub fn output_dest(&self) -> PathBuf {
        PathBuf::from(&self.output.path).join(&self.output.filename)
    }
}
