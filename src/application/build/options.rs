//! Build Options
//!
//! Where a build finds its configuration.

use std::path::PathBuf;

use serde_json::Value;

use crate::config::default_config_value;
use crate::domain::value_objects::TaskInfo;
use crate::error::ConfigError;

/// Options for the build entry points
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Flag and env var names used to locate the user config file
    pub task: TaskInfo,
    /// Config file passed directly by the caller (highest priority)
    pub config_file: Option<PathBuf>,
    /// Config file named on the command line with the task's flag
    pub cli_config_file: Option<PathBuf>,
    /// Defaults the user config is merged over
    pub defaults: Value,
}

impl BuildOptions {
    pub fn new(defaults: Value) -> Self {
        Self {
            task: TaskInfo::bundler(),
            config_file: None,
            cli_config_file: None,
            defaults,
        }
    }

    /// Options using the built-in bundler defaults
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self::new(default_config_value()?))
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn with_cli_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cli_config_file = Some(path.into());
        self
    }
}
