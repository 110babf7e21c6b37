//! Configuration module
//!
//! - `types` - the bundler configuration (`devtool`, `entry`, `output`)
//! - `loader` - config file discovery and defaults merging
//! - `context` - project directories, path template variables, build caches

mod context;
mod loader;
mod types;

pub use context::{
    cache_transpiled_ts_files, BuildContext, ContextDirs, ENV_VAR_BUILD_DIR, ENV_VAR_ROOT_DIR,
    ENV_VAR_SRC_DIR, ENV_VAR_TMP_DIR, ENV_VAR_WWW_DIR,
};
pub use loader::{
    default_config_value, fill_config_defaults, get_bundler_config,
    get_user_config_file, load_config_value, ConfigSource, UserConfigFile,
};
pub use types::{BundlerConfig, EntryConfig, EntryValue, OutputConfig, DEFAULT_BUNDLER_CONFIG};
