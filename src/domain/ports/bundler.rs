//! Bundler port - the module bundler driven by the build worker
//!
//! A `Bundler` turns a resolved configuration into a one-shot `Compiler`.
//! The compiler exposes its input file system so the worker can wrap it
//! before the run starts.

use std::sync::Arc;

use crate::config::BundlerConfig;
use crate::domain::entities::CompilationStats;
use crate::domain::ports::InputFileSystem;
use crate::error::CompileError;

/// Error raised when a compiler cannot be created from a configuration
#[derive(Debug)]
pub enum BundlerStartError {
    /// The configuration is not usable by this bundler
    InvalidConfig(String),
    /// Any other start-up failure
    Other(String),
}

impl std::fmt::Display for BundlerStartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundlerStartError::InvalidConfig(msg) => {
                write!(f, "Invalid bundler configuration: {}", msg)
            }
            BundlerStartError::Other(msg) => write!(f, "Bundler failed to start: {}", msg),
        }
    }
}

impl std::error::Error for BundlerStartError {}

/// Factory for compilers
pub trait Bundler: Send + Sync {
    /// Create a compiler for a single run
    fn create_compiler(
        &self,
        config: &BundlerConfig,
    ) -> Result<Box<dyn Compiler>, BundlerStartError>;
}

/// A configured, not yet started compilation
///
/// `run` consumes the compiler, so a compiler completes at most once.
pub trait Compiler: Send {
    /// File system the compiler reads its inputs from
    fn input_file_system(&self) -> Arc<dyn InputFileSystem>;

    /// Replace the input file system for the upcoming run
    fn set_input_file_system(&mut self, fs: Arc<dyn InputFileSystem>);

    /// Run the compilation to completion
    fn run(self: Box<Self>) -> Result<CompilationStats, CompileError>;
}
