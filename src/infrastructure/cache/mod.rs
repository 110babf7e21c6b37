//! Module Path Cache Implementations
//!
//! - InMemoryModulePathCache: process-lifetime slot
//! - JsonModulePathCache: JSON file under the tmp dir, written in the background

mod json;
mod memory;

pub use json::{JsonModulePathCache, MODULE_PATHS_FILE};
pub use memory::InMemoryModulePathCache;
