//! Configuration file discovery, loading and defaults merging
//!
//! Config file location, highest priority first:
//! 1. Path passed by the caller
//! 2. Environment variable (`ionic_webpack`, `npm_config_ionic_webpack`)
//! 3. CLI flag (`--webpack` / `-w`)
//! 4. `webpack.config` in the project root

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::value_objects::TaskInfo;
use crate::error::ConfigError;

use super::context::BuildContext;
use super::types::{BundlerConfig, DEFAULT_BUNDLER_CONFIG};

/// Where the user config file path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit,
    Env,
    CliFlag,
    DefaultName,
}

/// A located (not necessarily existing) user config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfigFile {
    pub path: PathBuf,
    pub source: ConfigSource,
}

/// Locate the user's config file
///
/// Relative paths resolve against the context root directory.
pub fn get_user_config_file(
    context: &BuildContext,
    task: &TaskInfo,
    explicit: Option<&Path>,
    cli_flag: Option<&Path>,
) -> UserConfigFile {
    let resolve = |p: &Path| context.root_dir.join(p);

    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return UserConfigFile {
            path: resolve(path),
            source: ConfigSource::Explicit,
        };
    }

    let from_env = task
        .env_vars()
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()));
    if let Some(value) = from_env {
        return UserConfigFile {
            path: resolve(Path::new(&value)),
            source: ConfigSource::Env,
        };
    }

    if let Some(path) = cli_flag.filter(|p| !p.as_os_str().is_empty()) {
        tracing::debug!(
            flag = task.full_arg_config,
            short = task.short_arg_config,
            "config file named on the command line"
        );
        return UserConfigFile {
            path: resolve(path),
            source: ConfigSource::CliFlag,
        };
    }

    UserConfigFile {
        path: resolve(Path::new(task.default_config_file)),
        source: ConfigSource::DefaultName,
    }
}

/// Parsed built-in defaults
pub fn default_config_value() -> Result<Value, ConfigError> {
    toml::from_str(DEFAULT_BUNDLER_CONFIG).map_err(|e| ConfigError::Parse {
        file: PathBuf::from("<built-in defaults>"),
        message: e.to_string(),
    })
}

/// Load a config file into a JSON value (`.json` as JSON, anything else as TOML)
pub fn load_config_value(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let parsed: Result<Value, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ConfigError::Parse {
        file: path.to_path_buf(),
        message,
    })
}

/// Overlay the user's config onto the defaults and deserialize the result
///
/// Keys present in the user file replace the default value for that key as a
/// whole. A user file that does not exist is reported and the defaults are
/// used instead.
pub fn fill_config_defaults(
    user_config_file: Option<&Path>,
    defaults: &Value,
) -> Result<BundlerConfig, ConfigError> {
    let mut merged: Map<String, Value> = defaults.as_object().cloned().unwrap_or_default();

    if let Some(path) = user_config_file {
        match load_config_value(path) {
            Ok(Value::Object(user)) => merged.extend(user),
            Ok(_) => {
                return Err(ConfigError::Parse {
                    file: path.to_path_buf(),
                    message: "config must be a table".to_string(),
                })
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    file = %path.display(),
                    "config file not found, using defaults instead"
                );
            }
            Err(e) => return Err(e),
        }
    }

    for field in ["entry", "output"] {
        if !merged.contains_key(field) {
            return Err(ConfigError::MissingField { field });
        }
    }

    let file = user_config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("<built-in defaults>"));

    let mut unknown_keys: Vec<String> = Vec::new();
    let config: BundlerConfig = serde_ignored::deserialize(Value::Object(merged), |p| {
        unknown_keys.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: file.clone(),
        message: e.to_string(),
    })?;

    for key in unknown_keys {
        tracing::warn!(file = %file.display(), key = %key, "ignoring unknown config key");
    }

    Ok(config)
}

/// Resolve the bundler configuration for a build
///
/// Locates the config file, fills defaults and substitutes path template
/// variables into `entry` and `output.path`. Paths still relative after
/// substitution are taken relative to the context root directory.
pub fn get_bundler_config(
    context: &BuildContext,
    task: &TaskInfo,
    explicit: Option<&Path>,
    cli_flag: Option<&Path>,
    defaults: &Value,
) -> Result<BundlerConfig, ConfigError> {
    let user_file = get_user_config_file(context, task, explicit, cli_flag);
    tracing::debug!(
        file = %user_file.path.display(),
        source = ?user_file.source,
        "resolved bundler config file"
    );

    let resolve = |template: &str| -> Result<String, ConfigError> {
        let path = context.replace_path_vars(template)?;
        if Path::new(&path).is_absolute() {
            Ok(path)
        } else {
            Ok(context.root_dir.join(&path).to_string_lossy().into_owned())
        }
    };

    let mut config = fill_config_defaults(Some(&user_file.path), defaults)?;
    config.entry = config.entry.try_map(&resolve)?;
    config.output.path = resolve(&config.output.path)?;

    Ok(config)
}
