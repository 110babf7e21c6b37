//! Concatenating bundler
//!
//! A minimal bundler: every entry module is read through the
//! compiler's input file system and the texts are joined into a single
//! output file. Imports are not followed.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::BundlerConfig;
use crate::domain::entities::{CompilationStats, ModuleRecord};
use crate::domain::ports::{Bundler, BundlerStartError, Compiler, FsError, InputFileSystem};
use crate::error::CompileError;
use crate::infrastructure::fs::DiskFs;

/// Bundler that concatenates its entry modules
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatBundler;

impl ConcatBundler {
    pub fn new() -> Self {
        Self
    }
}

impl Bundler for ConcatBundler {
    fn create_compiler(
        &self,
        config: &BundlerConfig,
    ) -> Result<Box<dyn Compiler>, BundlerStartError> {
        let entries: Vec<PathBuf> = config.entry.paths().into_iter().map(PathBuf::from).collect();
        if entries.is_empty() || entries.iter().any(|e| e.as_os_str().is_empty()) {
            return Err(BundlerStartError::InvalidConfig(
                "entry must name at least one module".to_string(),
            ));
        }
        if config.output.filename.is_empty() {
            return Err(BundlerStartError::InvalidConfig(
                "output.filename must not be empty".to_string(),
            ));
        }

        Ok(Box::new(ConcatCompiler {
            entries,
            output: config.output_dest(),
            input_fs: Arc::new(DiskFs::new()),
        }))
    }
}

/// One run of the concatenating bundler
pub struct ConcatCompiler {
    entries: Vec<PathBuf>,
    output: PathBuf,
    input_fs: Arc<dyn InputFileSystem>,
}

impl Compiler for ConcatCompiler {
    fn input_file_system(&self) -> Arc<dyn InputFileSystem> {
        Arc::clone(&self.input_fs)
    }

    fn set_input_file_system(&mut self, fs: Arc<dyn InputFileSystem>) {
        self.input_fs = fs;
    }

    fn run(self: Box<Self>) -> Result<CompilationStats, CompileError> {
        let mut bundle = String::new();
        let mut modules = Vec::with_capacity(self.entries.len());
        let mut warnings = Vec::new();

        for entry in &self.entries {
            let bytes = self.input_fs.read_file(entry).map_err(|e| match e {
                FsError::NotFound(_) => CompileError::EntryNotFound {
                    path: entry.clone(),
                    source: e,
                },
                other => CompileError::Bundler(format!(
                    "failed to read {}: {}",
                    entry.display(),
                    other
                )),
            })?;

            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => {
                    warnings.push(format!("{} is not valid UTF-8", entry.display()));
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };

            bundle.push_str(&format!("/* {} */\n", entry.display()));
            bundle.push_str(&text);
            if !text.ends_with('\n') {
                bundle.push('\n');
            }
            modules.push(ModuleRecord::resource(entry.clone()));
        }

        let emit_err = |source| CompileError::Emit {
            path: self.output.clone(),
            source,
        };
        if let Some(parent) = self.output.parent() {
            fs::create_dir_all(parent).map_err(emit_err)?;
        }
        fs::write(&self.output, bundle).map_err(emit_err)?;

        let mut stats = CompilationStats::new(modules);
        stats.warnings = warnings;
        Ok(stats)
    }
}
