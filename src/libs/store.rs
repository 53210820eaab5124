//! Persistence collaborator for shift records.
//!
//! Implementations must make `save` a compare-and-swap on
//! [`ShiftRecord::version`]: a record saved with a stale version fails with
//! [`StoreError::VersionConflict`] and writes nothing.

use crate::libs::error::StoreError;
use crate::libs::shift::{EmployeeId, ShiftKey, ShiftRecord};
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub trait ShiftStore: Send + Sync {
    /// `Ok(None)` when nothing was punched for that employee-day.
    fn load(&self, employee_id: &EmployeeId, date: NaiveDate) -> Result<Option<ShiftRecord>, StoreError>;

    /// Writes `record` and returns it with its new version.
    fn save(&self, record: &ShiftRecord) -> Result<ShiftRecord, StoreError>;
}

impl<S: ShiftStore + ?Sized> ShiftStore for Arc<S> {
    fn load(&self, employee_id: &EmployeeId, date: NaiveDate) -> Result<Option<ShiftRecord>, StoreError> {
        (**self).load(employee_id, date)
    }

    fn save(&self, record: &ShiftRecord) -> Result<ShiftRecord, StoreError> {
        (**self).save(record)
    }
}

/// Process-local store, used by tests and by embedders without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<ShiftKey, ShiftRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record as-is, bypassing versioning. For seeding historical data.
    pub fn seed(&self, record: ShiftRecord) {
        self.records.write().insert(record.key(), record);
    }

    /// All records of one employee, sorted by date.
    pub fn records_for(&self, employee_id: &EmployeeId) -> Vec<ShiftRecord> {
        let mut records: Vec<ShiftRecord> = self
            .records
            .read()
            .values()
            .filter(|record| &record.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.date);
        records
    }
}

impl ShiftStore for MemoryStore {
    fn load(&self, employee_id: &EmployeeId, date: NaiveDate) -> Result<Option<ShiftRecord>, StoreError> {
        let key = ShiftKey::new(employee_id.clone(), date);
        Ok(self.records.read().get(&key).cloned())
    }

    fn save(&self, record: &ShiftRecord) -> Result<ShiftRecord, StoreError> {
        let key = record.key();
        let mut records = self.records.write();
        let found = records.get(&key).map(|stored| stored.version);
        if found.unwrap_or(0) != record.version {
            return Err(StoreError::VersionConflict {
                key,
                expected: record.version,
                found,
            });
        }
        let saved = ShiftRecord {
            version: record.version + 1,
            ..record.clone()
        };
        records.insert(key, saved.clone());
        Ok(saved)
    }
}
