//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - The `build` / `build_incremental` entry points
//! - `build_worker` - One compilation reconciled into the caches
//! - `WatchUseCase` - Rebuild on file-system changes

pub mod build;
pub mod watch;

pub use build::{build_worker, BuildOptions, BuildUseCase};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
