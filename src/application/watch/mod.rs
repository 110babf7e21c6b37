//! Watch Use Case
//!
//! Continuous rebuilds driven by file-system events:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Full rebuild through `BuildUseCase::build_incremental` per batch
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(build, build_options, WatchOptions::new(&context.src_dir));
//! use_case.start(&mut context, running, |event| { ... })?;
//! ```

mod event;
mod use_case;


pub use event::{classify, WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
