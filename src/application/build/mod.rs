//! Build Module
//!
//! ## Structure
//!
//! - `options` - Where a build finds its configuration (`BuildOptions`)
//! - `worker` - One compilation reconciled into the caches (`build_worker`)
//! - `use_case` - The `build` / `build_incremental` entry points (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use bundle_overlay::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(Arc::new(ConcatBundler::new()));
//! let dest = use_case.build(&mut context, &BuildOptions::builtin()?)?;
//! ```

mod options;
mod use_case;
mod worker;

pub use options::BuildOptions;
pub use use_case::BuildUseCase;
pub use worker::build_worker;

#[cfg(test)]
mod tests;
