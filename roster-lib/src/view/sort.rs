//! Sort stage: stable single-column ordering.

use std::cmp::Ordering;

use super::state::Direction;
use super::state::SortState;
use crate::model::Record;
use crate::model::Value;

/// Orders `indices` (positions into `rows`) by `sort`.
///
/// With no sort column the indices come back unchanged. Otherwise the rows
/// are compared with [`Value::sort_cmp`] on the sort column, treating a
/// missing cell as null. The sort is stable, and a descending sort reverses
/// the comparator rather than the output, so rows with equal keys keep
/// their incoming relative order in both directions.
pub fn apply(rows: &[Record], mut indices: Vec<usize>, sort: &SortState) -> Vec<usize> {
    let Some(key) = sort.column_key.as_deref() else {
        return indices;
    };

    indices.sort_by(|&a, &b| compare(&rows[a], &rows[b], key, sort.direction));
    indices
}

/// Compares two records on `key` in `direction`.
pub fn compare(a: &Record, b: &Record, key: &str, direction: Direction) -> Ordering {
    let left = a.get(key).unwrap_or(&Value::Null);
    let right = b.get(key).unwrap_or(&Value::Null);
    let ordering = left.sort_cmp(right);
    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn names(rows: &[Record], order: &[usize]) -> Vec<String> {
        order
            .iter()
            .map(|&i| rows[i].display("name").unwrap_or_default())
            .collect()
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new().set("id", 1i64).set("name", "Bob").set("dept", "IT"),
            Record::new().set("id", 2i64).set("name", "Ann").set("dept", "HR"),
            Record::new().set("id", 3i64).set("name", "Cid").set("dept", "IT"),
        ]
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let rows = rows();
        assert_eq!(apply(&rows, vec![2, 0, 1], &SortState::none()), [2, 0, 1]);
    }

    #[test]
    fn test_sort_by_name() {
        let rows = rows();
        let asc = apply(&rows, vec![0, 1, 2], &SortState::asc("name"));
        assert_eq!(names(&rows, &asc), ["Ann", "Bob", "Cid"]);

        let desc = apply(&rows, vec![0, 1, 2], &SortState::desc("name"));
        assert_eq!(names(&rows, &desc), ["Cid", "Bob", "Ann"]);
    }

    #[test]
    fn test_ties_keep_incoming_order_in_both_directions() {
        let rows = rows();
        // Bob and Cid share dept IT.
        assert_eq!(apply(&rows, vec![0, 1, 2], &SortState::asc("dept")), [1, 0, 2]);
        assert_eq!(apply(&rows, vec![0, 1, 2], &SortState::desc("dept")), [0, 2, 1]);
    }

    #[test]
    fn test_numeric_sort_is_numeric() {
        let rows = vec![
            Record::new().set("n", 10i64),
            Record::new().set("n", 9i64),
            Record::new().set("n", 100i64),
        ];
        assert_eq!(apply(&rows, vec![0, 1, 2], &SortState::asc("n")), [1, 0, 2]);
    }

    #[test]
    fn test_missing_cells_sort_as_null() {
        let rows = vec![
            Record::new().set("n", 1i64),
            Record::new(),
            Record::new().set("n", 0i64),
        ];
        assert_eq!(apply(&rows, vec![0, 1, 2], &SortState::asc("n")), [1, 2, 0]);
        assert_eq!(apply(&rows, vec![0, 1, 2], &SortState::desc("n")), [0, 2, 1]);
    }

    #[test]
    fn test_mixed_numbers_and_text_sort_in_classes() {
        // Alternating ints and numeric strings, as a column edited by hand.
        let rows: Vec<Record> = (0..200i64)
            .map(|n| {
                if n % 2 == 0 {
                    Record::new().set("pin", n)
                } else {
                    Record::new().set("pin", n.to_string())
                }
            })
            .collect();
        let order = apply(&rows, (0..rows.len()).collect(), &SortState::asc("pin"));
        assert_eq!(order.len(), 200);

        let (numbers, text) = order.split_at(100);
        assert!(numbers.iter().all(|&i| rows[i].get("pin").is_some_and(Value::is_numeric)));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));

        let text: Vec<String> = text
            .iter()
            .map(|&i| rows[i].display("pin").unwrap_or_default())
            .collect();
        let mut expected = text.clone();
        expected.sort();
        assert_eq!(text, expected);
        assert!(text.iter().all(|t| t.parse::<i64>().is_ok_and(|n| n % 2 == 1)));

        let desc = apply(&rows, (0..rows.len()).collect(), &SortState::desc("pin"));
        assert_eq!(desc[..100].iter().rev().copied().collect::<Vec<_>>(), &order[100..]);
    }

    #[test]
    fn test_mixed_value_kinds() {
        let rows = vec![
            Record::new().set("v", "b"),
            Record::new().set("v", 2.5),
            Record::new(),
            Record::new().set("v", true),
            Record::new().set("v", 2i64),
            Record::new().set("v", Decimal::new(21, 1)),
            Record::new().set("v", "10"),
        ];
        assert_eq!(
            apply(&rows, (0..7).collect(), &SortState::asc("v")),
            [2, 4, 5, 1, 6, 0, 3]
        );
    }

    #[test]
    fn test_stable_with_many_duplicate_keys() {
        let depts = ["HR", "IT", "Ops", "Sales"];
        let rows: Vec<Record> = (0..100i64)
            .map(|n| {
                Record::new()
                    .set("id", n)
                    .set("dept", depts[(n * 7 % 4) as usize])
            })
            .collect();
        let incoming: Vec<usize> = (0..100).rev().collect();

        for sort in [SortState::asc("dept"), SortState::desc("dept")] {
            let order = apply(&rows, incoming.clone(), &sort);
            for pair in order.windows(2) {
                let (a, b) = (&rows[pair[0]], &rows[pair[1]]);
                if a.get("dept") == b.get("dept") {
                    // Same key: incoming order was descending by id.
                    assert!(pair[0] > pair[1]);
                } else {
                    assert_eq!(compare(a, b, "dept", sort.direction), Ordering::Less);
                }
            }
        }
    }
}
