//! ModuleFileSet entity - the input files of the last completed bundle

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::compilation::ModuleRecord;

/// De-duplicated set of module paths, kept in first-seen order
///
/// Every entry is a non-empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PathBuf>", into = "Vec<PathBuf>")]
pub struct ModuleFileSet {
    paths: Vec<PathBuf>,
    #[serde(skip)]
    index: HashSet<PathBuf>,
}

impl ModuleFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the contributing path of every module in a graph
    pub fn from_modules<'a, I>(modules: I) -> Self
    where
        I: IntoIterator<Item = &'a ModuleRecord>,
    {
        modules
            .into_iter()
            .filter_map(ModuleRecord::file_path)
            .map(Path::to_path_buf)
            .collect()
    }

    /// Add a path; empty and already-present paths are ignored
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if path.as_os_str().is_empty() || self.index.contains(&path) {
            return false;
        }
        self.index.insert(path.clone());
        self.paths.push(path);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl FromIterator<PathBuf> for ModuleFileSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

impl From<Vec<PathBuf>> for ModuleFileSet {
    fn from(paths: Vec<PathBuf>) -> Self {
        paths.into_iter().collect()
    }
}

impl From<ModuleFileSet> for Vec<PathBuf> {
    fn from(set: ModuleFileSet) -> Self {
        set.paths
    }
}

impl<'a> IntoIterator for &'a ModuleFileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
