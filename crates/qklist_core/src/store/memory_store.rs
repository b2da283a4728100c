//! In-memory record store.
//!
//! Used by tests and embedders that do not need durability. Reads and writes
//! can be forced to fail to exercise error paths in callers.

use super::{RecordStore, StoreError, StoreFailure, StoreResult};
use crate::model::item::Item;

#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    items: Vec<Item>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: usize,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Makes every subsequent `read_all` fail until cleared.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes every subsequent `write_all` fail until cleared.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Snapshot of the stored list, bypassing read fault injection.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl RecordStore for MemoryRecordStore {
    fn read_all(&self) -> StoreResult<Vec<Item>> {
        if self.fail_reads {
            return Err(StoreError::Read(StoreFailure::Unavailable(
                "reads disabled".to_string(),
            )));
        }
        Ok(self.items.clone())
    }

    fn write_all(&mut self, items: &[Item]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Write(StoreFailure::Unavailable(
                "writes disabled".to_string(),
            )));
        }
        self.items = items.to_vec();
        self.write_count += 1;
        Ok(())
    }
}
