//! Error types for bundle-overlay
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error raised while a build is running.
///
/// The two variants let callers tell "the bundler reported a compile error"
/// apart from "the bundler could not even be started".
#[derive(Error, Debug)]
pub enum BuildError {
    /// Assembling the bundler configuration or starting the compiler failed
    #[error("build configuration failed: {source}")]
    Configuration {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The bundler ran and reported an error
    #[error(transparent)]
    Compilation(#[from] CompileError),
}

impl BuildError {
    /// Wrap a start-up failure as a configuration error
    pub fn configuration<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Configuration { source: err.into() }
    }

    /// True when the bundler itself reported the failure
    pub fn is_compilation(&self) -> bool {
        matches!(self, Self::Compilation(_))
    }
}

impl From<ConfigError> for BuildError {
    fn from(err: ConfigError) -> Self {
        Self::configuration(err)
    }
}

/// Error reported by the bundler for a finished compilation
#[derive(Error, Debug)]
pub enum CompileError {
    /// An entry point could not be read through the input file system
    #[error("entry module not found: {path}")]
    EntryNotFound {
        path: PathBuf,
        #[source]
        source: crate::domain::ports::FsError,
    },

    /// The bundle could not be written to its output destination
    #[error("failed to emit bundle to {path}: {source}")]
    Emit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bundler-specific failure passed through unchanged
    #[error("{0}")]
    Bundler(String),
}

/// Error raised while locating, loading or merging the bundler configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// A required key is missing after defaults were applied
    #[error("missing required field '{field}' in bundler config")]
    MissingField { field: &'static str },

    /// A path template variable has no value in the build context
    #[error("unknown path variable '{name}' in '{template}'")]
    UnknownPathVar { name: String, template: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised by watch mode outside of individual builds
#[derive(Error, Debug)]
pub enum WatchError {
    /// The file watcher could not be created or attached
    #[error("failed to watch {path}: {source}")]
    Notify {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}
