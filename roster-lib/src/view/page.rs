//! Paginator: fixed-size page slicing.

use serde::Serialize;

use super::state::PageState;

/// One page of rows with pager information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Rows on this page.
    pub rows: Vec<T>,
    /// Zero-based index of this page, after clamping.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of pages, at least one.
    pub page_count: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Number of pages needed for `len` rows: `max(1, ceil(len / page_size))`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps `page_index` into `[0, page_count - 1]`.
pub fn clamp_index(page_index: usize, len: usize, page_size: usize) -> usize {
    page_index.min(page_count(len, page_size) - 1)
}

/// Slices `items` into the page described by `page`.
///
/// An out-of-range index is clamped to the last page; a zero page size is
/// treated as one.
pub fn apply<T: Clone>(items: &[T], page: PageState) -> Page<T> {
    let page_size = page.page_size.max(1);
    let page_count = page_count(items.len(), page_size);
    let page_index = page.page_index.min(page_count - 1);

    let start = (page_index * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        rows: items[start..end].to_vec(),
        page_index,
        page_size,
        page_count,
        can_go_prev: page_index > 0,
        can_go_next: page_index + 1 < page_count,
    }
}
