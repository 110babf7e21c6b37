//! Build context - project directories plus the caches a build reads and writes
//!
//! Directory resolution, highest priority first:
//! 1. Value supplied by the caller
//! 2. Environment variable (`ionic_root_dir`, `ionic_src_dir`, ...)
//! 3. Built-in default relative to the root (`src`, `www`, `.tmp`, `www/build`)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{ModuleFileSet, TranspiledSourceCache, TsFile};
use crate::domain::ports::ModulePathCache;
use crate::error::ConfigError;
use crate::infrastructure::cache::InMemoryModulePathCache;

pub const ENV_VAR_ROOT_DIR: &str = "ionic_root_dir";
pub const ENV_VAR_SRC_DIR: &str = "ionic_src_dir";
pub const ENV_VAR_WWW_DIR: &str = "ionic_www_dir";
pub const ENV_VAR_TMP_DIR: &str = "ionic_tmp_dir";
pub const ENV_VAR_BUILD_DIR: &str = "ionic_build_dir";

const SRC_DIR: &str = "src";
const WWW_DIR: &str = "www";
const TMP_DIR: &str = ".tmp";
const BUILD_DIR: &str = "build";

/// Caller-supplied directory overrides; unset fields fall back to env or defaults
#[derive(Debug, Clone, Default)]
pub struct ContextDirs {
    pub root_dir: Option<PathBuf>,
    pub src_dir: Option<PathBuf>,
    pub www_dir: Option<PathBuf>,
    pub tmp_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
}

/// State shared by every step of a build
pub struct BuildContext {
    pub root_dir: PathBuf,
    pub src_dir: PathBuf,
    pub www_dir: PathBuf,
    pub tmp_dir: PathBuf,
    pub build_dir: PathBuf,

    /// Output of the TypeScript compile step, keyed by absolute source path
    pub ts_files: HashMap<PathBuf, TsFile>,

    /// Input files of the last successful bundle
    pub module_files: ModuleFileSet,

    transpiled: Arc<TranspiledSourceCache>,
    module_path_cache: Arc<dyn ModulePathCache>,
}

impl std::fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("root_dir", &self.root_dir)
            .field("src_dir", &self.src_dir)
            .field("www_dir", &self.www_dir)
            .field("tmp_dir", &self.tmp_dir)
            .field("build_dir", &self.build_dir)
            .field("ts_files", &self.ts_files.len())
            .field("module_files", &self.module_files.len())
            .finish()
    }
}

impl BuildContext {
    /// Context rooted at `root` with default directory layout, ignoring env vars
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root_dir = root.into();
        let www_dir = root_dir.join(WWW_DIR);
        Self {
            src_dir: root_dir.join(SRC_DIR),
            tmp_dir: root_dir.join(TMP_DIR),
            build_dir: www_dir.join(BUILD_DIR),
            www_dir,
            root_dir,
            ts_files: HashMap::new(),
            module_files: ModuleFileSet::new(),
            transpiled: Arc::new(TranspiledSourceCache::new()),
            module_path_cache: Arc::new(InMemoryModulePathCache::new()),
        }
    }

    /// Fill every directory from overrides, environment and defaults
    pub fn generate(dirs: ContextDirs) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;

        let root_dir = pick(dirs.root_dir, ENV_VAR_ROOT_DIR, &cwd, || cwd.clone());
        let src_dir = pick(dirs.src_dir, ENV_VAR_SRC_DIR, &root_dir, || root_dir.join(SRC_DIR));
        let www_dir = pick(dirs.www_dir, ENV_VAR_WWW_DIR, &root_dir, || root_dir.join(WWW_DIR));
        let tmp_dir = pick(dirs.tmp_dir, ENV_VAR_TMP_DIR, &root_dir, || root_dir.join(TMP_DIR));
        let build_dir = pick(dirs.build_dir, ENV_VAR_BUILD_DIR, &root_dir, || {
            www_dir.join(BUILD_DIR)
        });

        let mut context = Self::new(root_dir);
        context.src_dir = src_dir;
        context.www_dir = www_dir;
        context.tmp_dir = tmp_dir;
        context.build_dir = build_dir;
        Ok(context)
    }

    /// Use a different module path cache
    pub fn with_module_path_cache(mut self, cache: Arc<dyn ModulePathCache>) -> Self {
        self.module_path_cache = cache;
        self
    }

    pub fn module_path_cache(&self) -> &Arc<dyn ModulePathCache> {
        &self.module_path_cache
    }

    /// Current transpiled-source snapshot
    pub fn transpiled(&self) -> Arc<TranspiledSourceCache> {
        Arc::clone(&self.transpiled)
    }

    /// Replace the transpiled-source snapshot with the current `ts_files`
    pub fn cache_transpiled_ts_files(&mut self) -> Arc<TranspiledSourceCache> {
        self.transpiled = cache_transpiled_ts_files(&self.ts_files);
        self.transpiled()
    }

    /// Substitute `{{ROOT}}`, `{{SRC}}`, `{{WWW}}`, `{{TMP}}` and `{{BUILD}}`
    ///
    /// Any other `{{NAME}}` left in the result is an error.
    pub fn replace_path_vars(&self, template: &str) -> Result<String, ConfigError> {
        let vars: [(&str, &Path); 5] = [
            ("{{SRC}}", &self.src_dir),
            ("{{WWW}}", &self.www_dir),
            ("{{TMP}}", &self.tmp_dir),
            ("{{ROOT}}", &self.root_dir),
            ("{{BUILD}}", &self.build_dir),
        ];

        let mut resolved = template.to_string();
        for (var, dir) in vars {
            if resolved.contains(var) {
                resolved = resolved.replace(var, &dir.to_string_lossy());
            }
        }

        if let Some(start) = resolved.find("{{") {
            if let Some(len) = resolved[start..].find("}}") {
                return Err(ConfigError::UnknownPathVar {
                    name: resolved[start + 2..start + len].to_string(),
                    template: template.to_string(),
                });
            }
        }

        Ok(resolved)
    }
}

/// Build a fresh transpiled-source snapshot from compile-step output
pub fn cache_transpiled_ts_files(ts_files: &HashMap<PathBuf, TsFile>) -> Arc<TranspiledSourceCache> {
    Arc::new(TranspiledSourceCache::from_ts_files(ts_files))
}

fn pick(
    explicit: Option<PathBuf>,
    env_var: &str,
    base: &Path,
    default: impl FnOnce() -> PathBuf,
) -> PathBuf {
    explicit
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .map(|p| base.join(p))
        .unwrap_or_else(default)
}
