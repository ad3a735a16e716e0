//! Filter stage: global search plus per-column exact matches.

use std::collections::HashSet;

use super::state::FilterState;
use crate::model::Column;
use crate::model::Record;

/// Returns the indices of the rows that pass `filter`, in row order.
///
/// A row passes when the global query matches (see [`matches_global`]) and
/// every active column filter matches (see [`matches_columns`]). Column
/// filters on keys that no row contains are ignored, as are filters with an
/// empty value. The result is always an ordered subset of `0..rows.len()`.
pub fn apply(rows: &[Record], filter: &FilterState, columns: &[Column]) -> Vec<usize> {
    if filter.is_empty() {
        return (0..rows.len()).collect();
    }

    let query = filter.global_query.trim().to_lowercase();
    let active = active_column_filters(rows, filter);

    rows.iter()
        .enumerate()
        .filter(|(_, record)| matches_global(record, &query, columns) && matches_columns(record, &active))
        .map(|(index, _)| index)
        .collect()
}

/// Column filters that constrain `rows`: non-empty values on known keys.
fn active_column_filters<'a>(rows: &[Record], filter: &'a FilterState) -> Vec<(&'a str, &'a str)> {
    let known: HashSet<&str> = rows.iter().flat_map(|r| r.keys()).collect();

    filter
        .column_filters
        .iter()
        .filter(|(key, value)| {
            if value.is_empty() {
                return false;
            }
            if !known.contains(key.as_str()) {
                log::debug!("[filter] ignoring filter on unknown column '{}'", key);
                return false;
            }
            true
        })
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

/// Case-insensitive substring match of `query` against any column.
///
/// `query` must already be trimmed and lowercased; an empty query matches
/// every row. With a column list the listed keys are scanned, otherwise
/// every field of the record. Missing and null cells never match.
pub fn matches_global(record: &Record, query: &str, columns: &[Column]) -> bool {
    if query.is_empty() {
        return true;
    }

    let cell_matches = |value: &crate::model::Value| {
        !value.is_null() && value.to_string().to_lowercase().contains(query)
    };

    if columns.is_empty() {
        record.fields().values().any(cell_matches)
    } else {
        columns
            .iter()
            .filter_map(|c| record.get(&c.key))
            .any(cell_matches)
    }
}

/// Case-sensitive exact match of every `(key, value)` pair.
///
/// A record without the key does not match.
pub fn matches_columns(record: &Record, filters: &[(&str, &str)]) -> bool {
    filters.iter().all(|(key, expected)| {
        record
            .get(key)
            .is_some_and(|value| value.to_string() == *expected)
    })
}
