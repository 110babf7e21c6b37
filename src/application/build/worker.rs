//! Build Worker
//!
//! Runs exactly one bundler compilation and reconciles the result into the
//! build context:
//! 1. Resolve the bundler config (path variables substituted)
//! 2. Create the compiler
//! 3. Swap its input file system for an overlay over the transpiled cache
//! 4. Run the compilation
//! 5. On success record the module file set and announce the output file
//!
//! A failed compilation leaves both caches untouched and emits nothing.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{get_bundler_config, BuildContext};
use crate::domain::entities::ModuleFileSet;
use crate::domain::ports::{BuildEvent, BuildEventSink, Bundler};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::fs::InMemoryFileSystem;

use super::options::BuildOptions;

/// Run one compilation and return the emitted bundle path
pub fn build_worker(
    context: &mut BuildContext,
    options: &BuildOptions,
    bundler: &dyn Bundler,
    events: &dyn BuildEventSink,
) -> BuildResult<PathBuf> {
    let config = get_bundler_config(
        context,
        &options.task,
        options.config_file.as_deref(),
        options.cli_config_file.as_deref(),
        &options.defaults,
    )?;

    let mut compiler = bundler
        .create_compiler(&config)
        .map_err(BuildError::configuration)?;

    // Fresh overlay per run so a replaced cache snapshot is always picked up
    let overlay = InMemoryFileSystem::new(compiler.input_file_system(), context.transpiled());
    compiler.set_input_file_system(Arc::new(overlay));

    let stats = compiler.run()?;
    for warning in &stats.warnings {
        tracing::warn!("{}", warning);
    }

    let module_files = ModuleFileSet::from_modules(&stats.compilation.modules);
    tracing::debug!(modules = module_files.len(), "recorded bundle inputs");
    context.module_path_cache().set(module_files.clone());
    context.module_files = module_files;

    let dest = config.output_dest();
    events.on_event(BuildEvent::FileChange { path: dest.clone() });
    Ok(dest)
}
