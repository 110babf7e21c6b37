//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod bundler;
pub mod file_system;
pub mod module_path_cache;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use bundler::{Bundler, BundlerStartError, Compiler};
pub use file_system::{FileKind, FileStat, FsError, FsResult, InputFileSystem};
pub use module_path_cache::ModulePathCache;
