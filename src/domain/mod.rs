//! Domain Layer
//!
//! Types and ports of the build overlay, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Transpiled sources, module file sets, compilation results
//! - `value_objects/` - Immutable value types (FileEventKind, TaskInfo)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
