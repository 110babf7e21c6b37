//! Process-lifetime module path cache

use std::sync::RwLock;

use crate::domain::entities::ModuleFileSet;
use crate::domain::ports::ModulePathCache;

/// Module path cache held in memory for the lifetime of the process
///
/// Writes are synchronous and cheap, so `set` is complete on return.
#[derive(Debug, Default)]
pub struct InMemoryModulePathCache {
    slot: RwLock<Option<ModuleFileSet>>,
}

impl InMemoryModulePathCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModulePathCache for InMemoryModulePathCache {
    fn set(&self, paths: ModuleFileSet) {
        let mut slot = match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(paths);
    }

    fn get(&self) -> Option<ModuleFileSet> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
