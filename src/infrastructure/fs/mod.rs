//! File System Implementations
//!
//! Concrete implementations of the InputFileSystem port.

mod disk;
mod in_memory;

pub use disk::DiskFs;
pub use in_memory::InMemoryFileSystem;
