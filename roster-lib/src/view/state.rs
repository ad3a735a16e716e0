//! View state types: filter, sort and page criteria.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Filter criteria of a table view.
///
/// An empty global query and an empty column filter map mean "no
/// constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring searched across all columns.
    pub global_query: String,
    /// Column key to exact, case-sensitive display value.
    pub column_filters: BTreeMap<String, String>,
}

impl FilterState {
    /// Returns `true` if the global query constrains anything.
    pub fn has_global_query(&self) -> bool {
        !self.global_query.trim().is_empty()
    }

    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool {
        !self.has_global_query() && self.column_filters.is_empty()
    }
}

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction '{0}' (expected asc or desc)")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Single-column sort criteria.
///
/// No column key means rows keep their original insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_key: Option<String>,
    pub direction: Direction,
}

impl SortState {
    /// The neutral state: original order.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            column_key: Some(key.into()),
            direction: Direction::Asc,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            column_key: Some(key.into()),
            direction: Direction::Desc,
        }
    }

    /// Returns `true` if a column is sorted.
    pub fn is_sorted(&self) -> bool {
        self.column_key.is_some()
    }

    /// Returns the direction of `key`, if it is the sorted column.
    pub fn direction_of(&self, key: &str) -> Option<Direction> {
        match &self.column_key {
            Some(k) if k == key => Some(self.direction),
            _ => None,
        }
    }
}

/// Pagination criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page, always at least one.
    pub page_size: usize,
}

impl PageState {
    /// First page of the given size. Zero is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Sets the page index (builder pattern, unclamped).
    pub fn at(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Complete state of a table view, owned by [`TableView`](super::TableView).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
}
