//! Record store: the immutable row snapshot of a view session.

use std::sync::Arc;

use crate::model::Record;

/// An immutable snapshot of rows.
///
/// Filter, sort and page stages only read from the store and produce index
/// lists into it; row order here never changes. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    rows: Arc<[Record]>,
}

impl RecordStore {
    /// Creates a store holding `rows` in the given order.
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows: rows.into() }
    }

    /// Returns all rows in insertion order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Returns the row at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if at least one row has the field `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.rows.iter().any(|r| r.contains(key))
    }

    /// Finds a row by its id.
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.rows.iter().find(|r| r.id() == Some(id))
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(rows: Vec<Record>) -> Self {
        Self::new(rows)
    }
}
