pub mod build;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};

use bundle_overlay::config::{BuildContext, ContextDirs};
use bundle_overlay::domain::ports::BuildEventSink;
use bundle_overlay::infrastructure::{
    load_transpiled_manifest, JsonEventSink, JsonModulePathCache, LogEventSink,
};
use bundle_overlay::BuildOptions;

use crate::cli::ProjectArgs;

/// Everything a command needs to run builds for one project
pub struct Project {
    pub context: BuildContext,
    pub options: BuildOptions,
    pub module_paths: Arc<JsonModulePathCache>,
}

impl Project {
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        let context = BuildContext::generate(ContextDirs {
            root_dir: args.root.clone(),
            src_dir: args.src.clone(),
            www_dir: args.www.clone(),
            tmp_dir: args.tmp.clone(),
            build_dir: args.build_dir.clone(),
        })
        .context("Failed to resolve project directories")?;

        let module_paths = Arc::new(JsonModulePathCache::in_dir(&context.tmp_dir));
        tracing::debug!(file = %module_paths.path().display(), "module path cache");
        let mut context = context.with_module_path_cache(module_paths.clone());

        if let Some(manifest) = &args.transpiled {
            context.ts_files = load_transpiled_manifest(manifest).with_context(|| {
                format!("Failed to load transpiled manifest {}", manifest.display())
            })?;
        }

        let mut options = BuildOptions::builtin()?;
        if let Some(config) = &args.config {
            options = options.with_config_file(config);
        }
        if let Some(webpack) = &args.webpack {
            options = options.with_cli_config_file(webpack);
        }

        Ok(Self {
            context,
            options,
            module_paths,
        })
    }
}

/// NDJSON on stdout for `--json`, log lines otherwise
pub fn event_sink(json: bool) -> Arc<dyn BuildEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(LogEventSink)
    }
}
