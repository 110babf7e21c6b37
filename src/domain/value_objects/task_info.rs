//! TaskInfo value object - how a build task finds its config file

/// Names a build task uses to locate its user configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    /// Long CLI flag, e.g. `--webpack`
    pub full_arg_config: &'static str,
    /// Short CLI flag, e.g. `-w`
    pub short_arg_config: &'static str,
    /// Environment variable holding the config path
    pub env_config: &'static str,
    /// File name used when nothing else names a config
    pub default_config_file: &'static str,
}

impl TaskInfo {
    /// The bundler task
    pub const fn bundler() -> Self {
        Self {
            full_arg_config: "--webpack",
            short_arg_config: "-w",
            env_config: "ionic_webpack",
            default_config_file: "webpack.config",
        }
    }

    /// Environment variable names to consult, in order
    ///
    /// npm exposes `--key=value` options of `npm run` as `npm_config_key`.
    pub fn env_vars(&self) -> [String; 2] {
        [
            self.env_config.to_string(),
            format!("npm_config_{}", self.env_config),
        ]
    }
}

impl Default for TaskInfo {
    fn default() -> Self {
        Self::bundler()
    }
}
