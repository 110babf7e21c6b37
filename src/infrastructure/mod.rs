//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Input file systems (Disk, InMemory overlay)
//! - `cache/` - Module-path cache implementations (memory, JSON file)
//! - `events/` - Build event sinks (JSON, log)
//! - `bundler/` - Built-in bundler
//! - `manifest` - Transpiled manifest loading

pub mod bundler;
pub mod cache;
pub mod events;
pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use bundler::ConcatBundler;
pub use cache::{InMemoryModulePathCache, JsonModulePathCache};
pub use events::{JsonEventSink, LogEventSink};
pub use fs::{DiskFs, InMemoryFileSystem};
pub use manifest::load_transpiled_manifest;
