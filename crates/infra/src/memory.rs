use std::sync::RwLock;

use orderdesk_core::{DomainError, DomainResult};

use crate::store::Store;
use crate::tables::Tables;

/// In-memory store.
///
/// Writers take the lock exclusively and work on a copy of the tables; the
/// copy replaces the shared state only when the unit of work succeeds, so a
/// failure partway through leaves nothing behind. Reads see a committed
/// snapshot. Intended for tests/dev and single-process deployments; not
/// optimized for large data sets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> DomainResult<R> {
        let guard = self
            .tables
            .read()
            .map_err(|_| DomainError::storage("store lock poisoned"))?;
        Ok(f(&guard))
    }

    fn transact<R>(&self, f: impl FnOnce(&mut Tables) -> DomainResult<R>) -> DomainResult<R> {
        let mut guard = self
            .tables
            .write()
            .map_err(|_| DomainError::storage("store lock poisoned"))?;

        let mut working = guard.clone();
        let out = f(&mut working)?;
        *guard = working;
        Ok(out)
    }
}
