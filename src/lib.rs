//! bundle-overlay - incremental build cache overlay for a module bundler
//!
//! Drives a bundler over a project, serves already-transpiled sources to it
//! from memory instead of the raw files on disk, and records which files the
//! last successful bundle was built from.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;

// Re-exports for convenience
pub use application::{build_worker, BuildOptions, BuildUseCase, WatchOptions, WatchUseCase};
pub use config::{BuildContext, BundlerConfig, ContextDirs};
pub use domain::entities::{ModuleFileSet, TranspiledSourceCache};
pub use domain::ports::{BuildEvent, BuildEventSink, Bundler, InputFileSystem, ModulePathCache};
pub use domain::value_objects::{FileEventKind, TaskInfo};
pub use error::{BuildError, BuildResult, CompileError, ConfigError};
pub use infrastructure::{ConcatBundler, InMemoryFileSystem};
