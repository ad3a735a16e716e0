//! Column definitions

use serde::Deserialize;
use serde::Serialize;

/// A column of a table view.
///
/// The `key` addresses a field in each [`Record`](super::Record). `render`
/// is an opaque tag for the rendering layer (e.g. `"status-badge"`); the
/// view-model never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field key in each record.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Optional custom render tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

impl Column {
    /// Create a sortable column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            render: None,
        }
    }

    /// Mark the column as not sortable.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Attach a render tag.
    pub fn render(mut self, tag: impl Into<String>) -> Self {
        self.render = Some(tag.into());
        self
    }

    /// Derive columns from the keys of `records`, in first-seen order.
    ///
    /// Labels equal the keys. Used when a caller loads rows without a
    /// column layout.
    pub fn infer<'a>(records: impl IntoIterator<Item = &'a super::Record>) -> Vec<Column> {
        let mut keys = indexmap::IndexSet::new();
        for record in records {
            for key in record.keys() {
                if !keys.contains(key) {
                    keys.insert(key.to_string());
                }
            }
        }
        keys.into_iter().map(|k| Column::new(k.clone(), k)).collect()
    }
}
