//! Domain Entities
//!
//! - `TranspiledSourceCache` - transpiled sources served to the bundler
//! - `ModuleFileSet` - input files of the last completed bundle
//! - `CompilationStats` - module graph reported by a bundler run

mod compilation;
mod module_files;
mod transpiled;

pub use compilation::{Compilation, CompilationStats, ModuleRecord};
pub use module_files::ModuleFileSet;
pub use transpiled::{Encoding, TranspiledEntry, TranspiledSourceCache, TsFile};
