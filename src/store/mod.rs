//! In-memory record store: an ordered, position-addressed collection.
//!
//! Indices are always the dense range `[0, len)`; removing a record shifts
//! every later record down by one.

pub mod journal;
pub mod session;

pub use journal::{Journal, JournalEntry};
pub use session::EditSession;

use crate::errors::{AppError, AppResult};
use crate::models::ContainerRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<ContainerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check(&self, index: usize) -> AppResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(AppError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Insert at the end. Never fails.
    pub fn append(&mut self, record: ContainerRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> AppResult<&ContainerRecord> {
        self.check(index)?;
        Ok(&self.records[index])
    }

    /// Replace the record at `index`, returning the previous value.
    pub fn update(&mut self, index: usize, record: ContainerRecord) -> AppResult<ContainerRecord> {
        self.check(index)?;
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Remove the record at `index` and renumber the rest.
    pub fn remove(&mut self, index: usize) -> AppResult<ContainerRecord> {
        self.check(index)?;
        Ok(self.records.remove(index))
    }

    /// Records in display order.
    pub fn list(&self) -> &[ContainerRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Port, RecordFields, Status};
    use chrono::{NaiveDate, NaiveTime};

    fn rec(number: &str) -> ContainerRecord {
        let fields = RecordFields::new(
            Port::Molde,
            number,
            Status::Empty,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        );
        ContainerRecord::from_fields(&fields, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
    }

    fn numbers(store: &RecordStore) -> Vec<&str> {
        store
            .list()
            .iter()
            .map(|r| r.container_number.as_str())
            .collect()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = RecordStore::new();
        for n in ["C1", "C2", "C3", "C4"] {
            store.append(rec(n));
        }
        assert_eq!(store.len(), 4);
        assert_eq!(numbers(&store), ["C1", "C2", "C3", "C4"]);
    }

    #[test]
    fn remove_shifts_later_records_down() {
        let mut store = RecordStore::new();
        for n in ["C1", "C2", "C3", "C4"] {
            store.append(rec(n));
        }

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.container_number, "C2");
        assert_eq!(numbers(&store), ["C1", "C3", "C4"]);
        assert_eq!(store.get(1).unwrap(), &rec("C3"));
        assert_eq!(store.get(2).unwrap(), &rec("C4"));
    }

    #[test]
    fn update_touches_only_the_addressed_record() {
        let mut store = RecordStore::new();
        for n in ["C1", "C2", "C3"] {
            store.append(rec(n));
        }
        let before = store.clone();

        let mut changed = rec("C2");
        changed.comment = "checked".into();
        let old = store.update(1, changed.clone()).unwrap();

        assert_eq!(old, rec("C2"));
        assert_eq!(store.get(1).unwrap(), &changed);
        assert_eq!(store.get(0).unwrap(), before.get(0).unwrap());
        assert_eq!(store.get(2).unwrap(), before.get(2).unwrap());
    }

    #[test]
    fn out_of_range_leaves_store_unmodified() {
        let mut store = RecordStore::new();
        store.append(rec("C1"));
        let before = store.clone();

        assert!(matches!(
            store.get(1),
            Err(AppError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            store.update(5, rec("X")),
            Err(AppError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(
            store.remove(1),
            Err(AppError::IndexOutOfRange { .. })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn empty_store_rejects_every_index() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.remove(0).is_err());
    }
}
