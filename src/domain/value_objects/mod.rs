//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_event;
mod task_info;

pub use file_event::FileEventKind;
pub use task_info::TaskInfo;
