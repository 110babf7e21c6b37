//! Bundler Implementations
//!
//! Concrete implementations of the Bundler port.

mod concat;

pub use concat::{ConcatBundler, ConcatCompiler};
