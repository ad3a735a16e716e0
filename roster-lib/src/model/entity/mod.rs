//! Master data entities
//!
//! Typed rows for the employee, bank, role, location and designation
//! screens. Each entity converts into a [`Record`] for the table view and
//! knows its own column layout.

mod bank;
mod employee;
mod master;

pub use bank::*;
pub use employee::*;
pub use master::*;

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Column;
use super::Record;

/// Conversion of a typed entity into a table row.
pub trait IntoRecord {
    /// The column layout of the entity's table.
    fn columns() -> Vec<Column>;

    /// Converts the entity into a row keyed by its id.
    fn into_record(self) -> Record;
}

/// Converts a collection of entities into rows.
pub fn into_records<T: IntoRecord>(items: impl IntoIterator<Item = T>) -> Vec<Record> {
    items.into_iter().map(IntoRecord::into_record).collect()
}

/// Active/inactive flag shown as a status badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// Returns `Active` for `true`, `Inactive` for `false`.
    pub fn from_active(active: bool) -> Self {
        if active { Status::Active } else { Status::Inactive }
    }

    /// Returns `true` for `Active`.
    pub fn is_active(self) -> bool {
        matches!(self, Status::Active)
    }

    /// The display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render tag of status columns.
pub const STATUS_BADGE: &str = "status-badge";
