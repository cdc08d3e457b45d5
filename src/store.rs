//! Active dataset snapshot and its atomic holder

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Record;

/// An immutable, fully built view of the dataset.
///
/// Records keep source row order; the index maps lowercased canonical
/// serials to record positions. Rows without a serial are listed but not
/// indexed. Duplicate serials resolve to the later row while every row
/// stays in the listing.
#[derive(Debug)]
pub struct Snapshot {
    records: Vec<Record>,
    by_serial: HashMap<String, usize>,
}

impl Snapshot {
    /// Build a snapshot, deriving the serial index from the records
    pub fn new(records: Vec<Record>) -> Self {
        let mut by_serial = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if let Some(serial) = record.serial() {
                by_serial.insert(serial.to_lowercase(), position);
            }
        }
        Snapshot { records, by_serial }
    }

    /// Case-insensitive exact serial lookup
    pub fn get(&self, serial: &str) -> Option<&Record> {
        self.by_serial
            .get(&serial.to_lowercase())
            .map(|&position| &self.records[position])
    }

    /// All records in source row order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Thread-safe holder for the active snapshot with atomic replacement
pub struct Store {
    inner: arc_swap::ArcSwap<Snapshot>,
}

impl Store {
    /// A store starts populated; construct it after the first load succeeds.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            inner: arc_swap::ArcSwap::from_pointee(initial),
        }
    }

    /// Get the active snapshot.
    ///
    /// The returned `Arc` pins the snapshot for as long as the caller holds
    /// it; a concurrent `activate` does not disturb reads in flight.
    pub fn current(&self) -> Arc<Snapshot> {
        self.inner.load_full()
    }

    /// Atomically replace the active snapshot
    pub fn activate(&self, snapshot: Snapshot) {
        self.inner.store(Arc::new(snapshot));
    }
}
