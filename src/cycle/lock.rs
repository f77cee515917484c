//! Per-cycle operation locks.
//!
//! Processing, approval and payment must never run concurrently for the
//! same cycle. The registry hands out RAII guards; a second caller gets
//! [`EngineError::CycleBusy`] instead of blocking.

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Tracks which cycles currently have an operation in flight.
#[derive(Debug, Default)]
pub struct CycleLockRegistry {
    held: Mutex<HashSet<Uuid>>,
}

impl CycleLockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a cycle, or fails immediately if another
    /// operation holds it.
    pub fn acquire(&self, cycle_id: Uuid) -> EngineResult<CycleLockGuard<'_>> {
        let mut held = self
            .held
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !held.insert(cycle_id) {
            return Err(EngineError::CycleBusy { id: cycle_id });
        }
        Ok(CycleLockGuard {
            registry: self,
            cycle_id,
        })
    }

    fn release(&self, cycle_id: Uuid) {
        self.held
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&cycle_id);
    }
}

/// Holds a cycle's lock until dropped.
#[derive(Debug)]
pub struct CycleLockGuard<'a> {
    registry: &'a CycleLockRegistry,
    cycle_id: Uuid,
}

impl Drop for CycleLockGuard<'_> {
    fn drop(&mut self) {
        self.registry.release(self.cycle_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected() {
        let registry = CycleLockRegistry::new();
        let id = Uuid::new_v4();
        let _guard = registry.acquire(id).unwrap();
        assert!(matches!(
            registry.acquire(id),
            Err(EngineError::CycleBusy { .. })
        ));
    }

    #[test]
    fn test_lock_released_on_drop() {
        let registry = CycleLockRegistry::new();
        let id = Uuid::new_v4();
        drop(registry.acquire(id).unwrap());
        assert!(registry.acquire(id).is_ok());
    }

    #[test]
    fn test_different_cycles_do_not_contend() {
        let registry = CycleLockRegistry::new();
        let _a = registry.acquire(Uuid::new_v4()).unwrap();
        assert!(registry.acquire(Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_lock_released_even_after_error_path() {
        let registry = CycleLockRegistry::new();
        let id = Uuid::new_v4();
        {
            let _guard = registry.acquire(id).unwrap();
            // Simulates an operation failing while the guard is held.
        }
        assert!(registry.acquire(id).is_ok());
    }
}
