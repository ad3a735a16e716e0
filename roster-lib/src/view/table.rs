//! Table view-model: the facade composing filter, sort and pagination.

use serde::Serialize;

use super::filter;
use super::page;
use super::sort;
use super::state::Direction;
use super::state::FilterState;
use super::state::PageState;
use super::state::SortState;
use super::state::ViewState;
use super::store::RecordStore;
use crate::config::ViewConfig;
use crate::model::Column;
use crate::model::IntoRecord;
use crate::model::Record;

/// Everything a rendering layer needs to draw a table, its pager and its
/// filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Rows on the current page.
    pub page_rows: Vec<Record>,
    /// Number of pages, at least one.
    pub page_count: usize,
    /// Number of rows passing the filters, across all pages.
    pub total_filtered_count: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub sort_state: SortState,
    pub filter_state: FilterState,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// A client-side table over a snapshot of records.
///
/// `TableView` owns the rows of one session and the [`ViewState`] the user
/// manipulates. Every derived view is recomputed in a fixed order (filter,
/// then sort, then paginate) from the untouched [`RecordStore`].
///
/// Setters never fail: unknown column keys are ignored, page sizes of zero
/// become one and page indices are clamped. Changing the filter or sort
/// criteria, the page size or the rows themselves returns to the first page.
///
/// # Example
///
/// ```
/// use roster_lib::TableView;
/// use roster_lib::model::{Column, Record};
/// use roster_lib::view::Direction;
///
/// let mut view = TableView::with_rows(
///     vec![Column::new("id", "ID"), Column::new("name", "Name")],
///     vec![
///         Record::new().set("id", 1i64).set("name", "Bob"),
///         Record::new().set("id", 2i64).set("name", "Ann"),
///         Record::new().set("id", 3i64).set("name", "Cid"),
///     ],
/// );
///
/// view.set_sort("name", Some(Direction::Asc));
/// view.set_page_size(2);
/// view.set_page_index(1);
///
/// let snapshot = view.snapshot();
/// assert_eq!(snapshot.page_rows.len(), 1);
/// assert_eq!(snapshot.page_rows[0].get_string("name").unwrap(), Some("Cid"));
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<Column>,
    store: RecordStore,
    state: ViewState,
    config: ViewConfig,
}

impl TableView {
    /// Create an empty view with the default configuration.
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_config(columns, ViewConfig::default())
    }

    /// Create an empty view with a custom configuration.
    pub fn with_config(columns: Vec<Column>, config: ViewConfig) -> Self {
        let state = ViewState {
            page: PageState::new(config.default_page_size),
            ..Default::default()
        };
        Self {
            columns,
            store: RecordStore::default(),
            state,
            config,
        }
    }

    /// Create a view holding `rows`.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Record>) -> Self {
        let mut view = Self::new(columns);
        view.store = RecordStore::new(rows);
        view
    }

    /// Create a view over typed entities, using the entity's column layout.
    pub fn from_entities<T: IntoRecord>(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_rows(T::columns(), crate::model::entity::into_records(items))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All rows, in their original order.
    pub fn rows(&self) -> &[Record] {
        self.store.rows()
    }

    /// The record store of the current session.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The page sizes offered by the page-size selector.
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// Returns `true` if `size` is one of the offered page sizes.
    pub fn offers_page_size(&self, size: usize) -> bool {
        self.config.offers(size)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the row snapshot wholesale and return to the first page.
    ///
    /// Filter and sort criteria are kept.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        log::debug!("[table] replacing {} rows with {}", self.store.len(), rows.len());
        self.store = RecordStore::new(rows);
        self.state.page.page_index = 0;
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Set the global search text.
    ///
    /// The page resets only when the trimmed query changes, since that is
    /// what the filter matches on.
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        let changed = self.state.filter.global_query.trim() != query.trim();
        self.state.filter.global_query = query;
        if changed {
            self.state.page.page_index = 0;
        }
    }

    /// Set (`Some`) or clear (`None`) the exact-match filter of a column.
    ///
    /// An empty value clears the filter. Keys that are neither a column nor a
    /// field of any row are ignored.
    pub fn set_column_filter(&mut self, key: &str, value: Option<&str>) {
        let changed = match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                if !self.is_known_key(key) {
                    log::debug!("[table] ignoring filter on unknown column '{}'", key);
                    return;
                }
                let filters = &mut self.state.filter.column_filters;
                if filters.get(key).map(String::as_str) == Some(value) {
                    false
                } else {
                    filters.insert(key.to_string(), value.to_string());
                    true
                }
            }
            None => self.state.filter.column_filters.remove(key).is_some(),
        };
        if changed {
            self.state.page.page_index = 0;
        }
    }

    /// Remove the global query and every column filter.
    pub fn clear_filters(&mut self) {
        if !self.state.filter.global_query.is_empty() || !self.state.filter.column_filters.is_empty() {
            self.state.filter = FilterState::default();
            self.state.page.page_index = 0;
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Sort by `key` in `direction`, or restore original order with `None`.
    ///
    /// Unknown and non-sortable columns are ignored.
    pub fn set_sort(&mut self, key: &str, direction: Option<Direction>) {
        let next = match direction {
            Some(direction) => {
                if !self.is_sortable(key) {
                    log::debug!("[table] ignoring sort on unknown or unsortable column '{}'", key);
                    return;
                }
                SortState {
                    column_key: Some(key.to_string()),
                    direction,
                }
            }
            None => SortState::none(),
        };
        self.apply_sort(next);
    }

    /// Restore original row order.
    pub fn clear_sort(&mut self) {
        self.apply_sort(SortState::none());
    }

    /// Cycle the sort of `key`: unsorted, ascending, descending, unsorted.
    ///
    /// Clicking a different column starts it ascending.
    pub fn toggle_sort(&mut self, key: &str) -> &SortState {
        let next = match self.state.sort.direction_of(key) {
            None => Some(Direction::Asc),
            Some(Direction::Asc) => Some(Direction::Desc),
            Some(Direction::Desc) => None,
        };
        self.set_sort(key, next);
        &self.state.sort
    }

    fn apply_sort(&mut self, next: SortState) {
        if self.state.sort != next {
            self.state.sort = next;
            self.state.page.page_index = 0;
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Jump to a page, clamped into the valid range.
    pub fn set_page_index(&mut self, page_index: usize) {
        let clamped = page::clamp_index(page_index, self.filtered_count(), self.state.page.page_size);
        if clamped != page_index {
            log::debug!("[table] page index {} clamped to {}", page_index, clamped);
        }
        self.state.page.page_index = clamped;
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::debug!("[table] page size 0 raised to 1");
        }
        self.state.page = PageState::new(page_size);
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) {
        self.set_page_index(self.state.page.page_index.saturating_add(1));
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&mut self) {
        self.set_page_index(self.state.page.page_index.saturating_sub(1));
    }

    /// Go to the first page.
    pub fn first_page(&mut self) {
        self.state.page.page_index = 0;
    }

    /// Go to the last page.
    pub fn last_page(&mut self) {
        self.set_page_index(usize::MAX);
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Compute the current page and pager state.
    ///
    /// Pure: repeated calls without intervening setters return equal results.
    pub fn snapshot(&self) -> Snapshot {
        let order = self.view_indices();
        let page = page::apply(&order, self.state.page);
        log::trace!(
            "[table] snapshot: {} of {} rows pass, page {}/{}",
            order.len(),
            self.store.len(),
            page.page_index + 1,
            page.page_count
        );

        Snapshot {
            page_rows: page
                .rows
                .iter()
                .map(|&i| self.store.rows()[i].clone())
                .collect(),
            page_count: page.page_count,
            total_filtered_count: order.len(),
            page_index: page.page_index,
            page_size: page.page_size,
            sort_state: self.state.sort.clone(),
            filter_state: self.state.filter.clone(),
            can_go_prev: page.can_go_prev,
            can_go_next: page.can_go_next,
        }
    }

    /// All rows passing the filters, in sorted order, without pagination.
    ///
    /// This is the row set an export writes.
    pub fn filtered_rows(&self) -> Vec<Record> {
        self.view_indices()
            .into_iter()
            .map(|i| self.store.rows()[i].clone())
            .collect()
    }

    /// Number of rows passing the filters.
    pub fn filtered_count(&self) -> usize {
        filter::apply(self.store.rows(), &self.state.filter, &self.columns).len()
    }

    /// Filter then sort, as indices into the store.
    fn view_indices(&self) -> Vec<usize> {
        let rows = self.store.rows();
        let filtered = filter::apply(rows, &self.state.filter, &self.columns);
        sort::apply(rows, filtered, &self.state.sort)
    }

    fn is_known_key(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key) || self.store.has_key(key)
    }

    fn is_sortable(&self, key: &str) -> bool {
        match self.columns.iter().find(|c| c.key == key) {
            Some(column) => column.sortable,
            None => self.store.has_key(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TableView {
        TableView::with_rows(
            vec![
                Column::new("id", "ID"),
                Column::new("name", "Name"),
                Column::new("dept", "Department"),
                Column::new("actions", "").unsortable(),
            ],
            vec![
                Record::new().set("id", 1i64).set("name", "Bob").set("dept", "IT"),
                Record::new().set("id", 2i64).set("name", "Ann").set("dept", "HR"),
                Record::new().set("id", 3i64).set("name", "Cid").set("dept", "IT"),
            ],
        )
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records
            .iter()
            .map(|r| r.get_int("id").unwrap().unwrap())
            .collect()
    }

    #[test]
    fn test_global_filter() {
        let mut view = view();
        view.set_global_filter("an");
        let snapshot = view.snapshot();
        assert_eq!(ids(&snapshot.page_rows), [2]);
        assert_eq!(snapshot.total_filtered_count, 1);
    }

    #[test]
    fn test_sort_then_paginate() {
        let mut view = view();
        view.set_sort("name", Some(Direction::Asc));
        view.set_page_size(2);

        assert_eq!(ids(&view.snapshot().page_rows), [2, 1]);
        view.set_page_index(1);
        let snapshot = view.snapshot();
        assert_eq!(ids(&snapshot.page_rows), [3]);
        assert!(snapshot.can_go_prev);
        assert!(!snapshot.can_go_next);
    }

    #[test]
    fn test_criteria_changes_reset_page() {
        let mut view = view();
        view.set_page_size(1);
        view.set_page_index(2);
        assert_eq!(view.state().page.page_index, 2);

        view.set_global_filter("i");
        assert_eq!(view.state().page.page_index, 0);

        view.set_page_index(1);
        view.set_column_filter("dept", Some("IT"));
        assert_eq!(view.state().page.page_index, 0);

        view.set_page_index(1);
        view.set_sort("name", Some(Direction::Desc));
        assert_eq!(view.state().page.page_index, 0);

        view.set_page_index(1);
        view.set_page_size(1);
        assert_eq!(view.state().page.page_index, 0);
    }

    #[test]
    fn test_repeating_same_criteria_keeps_page() {
        let mut view = view();
        view.set_page_size(1);
        view.set_sort("name", Some(Direction::Asc));
        view.set_page_index(2);

        view.set_sort("name", Some(Direction::Asc));
        view.set_global_filter("");
        view.set_column_filter("dept", None);
        assert_eq!(view.state().page.page_index, 2);
    }

    #[test]
    fn test_whitespace_only_query_change_keeps_page() {
        let mut view = view();
        view.set_page_size(1);
        view.set_page_index(2);

        view.set_global_filter("  ");
        assert_eq!(view.state().page.page_index, 2);
        assert_eq!(view.snapshot().total_filtered_count, 3);

        view.set_global_filter("i");
        view.set_page_index(1);
        view.set_global_filter(" i ");
        assert_eq!(view.state().page.page_index, 1);
        assert_eq!(view.state().filter.global_query, " i ");

        view.set_global_filter("in");
        assert_eq!(view.state().page.page_index, 0);
    }

    #[test]
    fn test_offers_page_size() {
        let view = view();
        assert!(view.offers_page_size(10));
        assert!(view.offers_page_size(50));
        assert!(!view.offers_page_size(15));

        let config = ViewConfig::new().with_page_size_options(vec![5, 25]);
        let custom = TableView::with_config(vec![], config);
        assert!(custom.offers_page_size(25));
        assert!(!custom.offers_page_size(10));
    }

    #[test]
    fn test_set_rows_resets_page_and_keeps_criteria() {
        let mut view = view();
        view.set_page_size(1);
        view.set_sort("name", Some(Direction::Asc));
        view.set_page_index(2);

        view.set_rows(vec![
            Record::new().set("id", 9i64).set("name", "Zoe"),
            Record::new().set("id", 8i64).set("name", "Yan"),
        ]);
        assert_eq!(view.state().page.page_index, 0);
        assert_eq!(ids(&view.snapshot().page_rows), [8]);
    }

    #[test]
    fn test_unknown_and_unsortable_keys_are_ignored() {
        let mut view = view();
        view.set_sort("salary", Some(Direction::Asc));
        view.set_sort("actions", Some(Direction::Asc));
        assert_eq!(view.state().sort, SortState::none());

        view.set_column_filter("salary", Some("100"));
        assert!(view.state().filter.column_filters.is_empty());
    }

    #[test]
    fn test_page_index_clamps() {
        let mut view = view();
        view.set_page_size(2);
        view.set_page_index(10);
        assert_eq!(view.state().page.page_index, 1);

        view.set_global_filter("zzz");
        view.set_page_index(3);
        let snapshot = view.snapshot();
        assert_eq!(snapshot.page_index, 0);
        assert_eq!(snapshot.page_count, 1);
        assert!(snapshot.page_rows.is_empty());
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let mut view = view();
        view.set_page_size(0);
        assert_eq!(view.snapshot().page_size, 1);
        assert_eq!(view.snapshot().page_count, 3);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut view = view();
        assert_eq!(view.toggle_sort("name"), &SortState::asc("name"));
        assert_eq!(view.toggle_sort("name"), &SortState::desc("name"));
        assert_eq!(view.toggle_sort("name"), &SortState::none());
        view.toggle_sort("name");
        assert_eq!(view.toggle_sort("id"), &SortState::asc("id"));
    }

    #[test]
    fn test_navigation() {
        let mut view = view();
        view.set_page_size(1);
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.state().page.page_index, 2);
        view.previous_page();
        assert_eq!(view.state().page.page_index, 1);
        view.first_page();
        assert_eq!(view.state().page.page_index, 0);
        view.previous_page();
        assert_eq!(view.state().page.page_index, 0);
        view.last_page();
        assert_eq!(view.state().page.page_index, 2);
    }

    #[test]
    fn test_filtered_rows_are_unpaginated() {
        let mut view = view();
        view.set_column_filter("dept", Some("IT"));
        view.set_sort("id", Some(Direction::Desc));
        view.set_page_size(1);

        assert_eq!(ids(&view.filtered_rows()), [3, 1]);
        assert_eq!(view.snapshot().page_rows.len(), 1);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut view = view();
        view.set_global_filter("i");
        view.set_sort("name", Some(Direction::Desc));
        assert_eq!(view.snapshot(), view.snapshot());
        assert_eq!(view.rows().len(), 3);
    }
}
