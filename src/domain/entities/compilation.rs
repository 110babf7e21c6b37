//! Compilation result - the module graph reported by a finished bundle

use std::path::{Path, PathBuf};

/// One module of the bundle's module graph
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleRecord {
    /// File the module was loaded from
    pub resource: Option<PathBuf>,
    /// Directory the module was resolved in
    pub context: Option<PathBuf>,
}

impl ModuleRecord {
    /// Module backed by a file
    pub fn resource(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            context: path.parent().map(Path::to_path_buf),
            resource: Some(path),
        }
    }

    /// Module without a file, such as a directory context node
    pub fn context_only(dir: impl Into<PathBuf>) -> Self {
        Self {
            resource: None,
            context: Some(dir.into()),
        }
    }

    /// Path this module contributes to the module file set
    ///
    /// The resource when it is set and non-empty, otherwise the context.
    /// `None` when neither carries a path.
    pub fn file_path(&self) -> Option<&Path> {
        non_empty(self.resource.as_deref()).or_else(|| non_empty(self.context.as_deref()))
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Module graph of a finished compilation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compilation {
    pub modules: Vec<ModuleRecord>,
}

/// Everything a successful run reports back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationStats {
    pub compilation: Compilation,
    /// Non-fatal diagnostics
    pub warnings: Vec<String>,
}

impl CompilationStats {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self {
            compilation: Compilation { modules },
            warnings: Vec::new(),
        }
    }
}
