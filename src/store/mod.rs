//! Inventory Store
//!
//! The authoritative in-memory record collection for the running process.
//! Every successful mutation re-persists the full collection to the backing
//! file synchronously before returning. A failed save is reported but not
//! rolled back: memory runs ahead of disk until the next successful save.
//!
//! Duplicate and missing ids are ordinary boolean outcomes, never errors.
//! Lookups return clones, so the only way to change a stored record is
//! through [`Inventory::update`] — external mutation cannot bypass the
//! persist-on-write behavior.

pub mod persistence;

use crate::record::Record;
use persistence::InventoryFile;
use std::path::PathBuf;

/// Ordered collection of records backed by a flat file.
///
/// Insertion order is preserved on load and add; update never reorders.
pub struct Inventory {
    records: Vec<Record>,
    file: InventoryFile,
}

impl Inventory {
    /// Open the inventory backed by the given file.
    ///
    /// Loads whatever the file holds; a missing or unreadable file yields
    /// an empty collection, never an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = InventoryFile::new(path);
        let records = file.load();
        Inventory { records, file }
    }

    /// Add a record. Returns false when a record with the same id already
    /// exists, leaving the collection unchanged.
    pub fn add(&mut self, record: Record) -> bool {
        if self.records.iter().any(|r| r.id == record.id) {
            return false;
        }
        self.records.push(record);
        self.persist();
        true
    }

    /// Remove the record with the given id. Returns false when absent.
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(pos);
        self.persist();
        true
    }

    /// Overwrite name/quantity/price of the record with `record.id`.
    /// The id itself is immutable. Returns false when absent.
    pub fn update(&mut self, record: Record) -> bool {
        let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) else {
            return false;
        };
        existing.name = record.name;
        existing.quantity = record.quantity;
        existing.price = record.price;
        self.persist();
        true
    }

    /// Find a record by id. Linear scan; returns a clone.
    pub fn find_by_id(&self, id: i64) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    /// All records in current order, as a defensive copy.
    pub fn list_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Low-stock records in collection order.
    pub fn list_low_stock(&self) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.is_low_stock())
            .cloned()
            .collect()
    }

    /// Next free id under the highest-id-plus-one scheme: 1 on an empty
    /// collection, otherwise one past the largest id present. Freed ids are
    /// not reclaimed.
    pub fn next_id(&self) -> i64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0).max(0) + 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full synchronous rewrite of the backing file. Failure is logged and
    /// the in-memory mutation stands; the next successful save resyncs.
    fn persist(&self) {
        if let Err(e) = self.file.save(&self.records) {
            tracing::error!(
                "Failed to save inventory to {}: {}",
                self.file.path().display(),
                e
            );
        }
    }
}
