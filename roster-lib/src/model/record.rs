//! Dynamic table row

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::Value;
use crate::error::FieldError;

/// A single table row.
///
/// Records hold cell values as an insertion-ordered map from column key to
/// [`Value`], so a row read from JSON keeps its field order. The optional
/// `id` is the application-defined identity of the row (an employee code, a
/// bank id), used by callers to track selections and edits.
///
/// # Example
///
/// ```
/// use roster_lib::model::Record;
///
/// let record = Record::with_id("EMP001")
///     .set("name", "John Doe")
///     .set("department", "IT");
///
/// assert_eq!(record.get_string("name").unwrap(), Some("John Doe"));
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["name", "department"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The unique key of the row, if the source provides one.
    pub(crate) id: Option<String>,

    /// The cell values, in insertion order.
    pub(crate) fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a new empty record without an id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty record with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: IndexMap::new(),
        }
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the record id, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the record id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the display form of a field, if it exists.
    pub fn display(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|v| v.to_string())
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the field keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value. Replacing an existing key keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value, preserving the order of the rest.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // A missing column or a cell of another kind is an error; a null cell
    // reads as Ok(None).
    // =========================================================================

    fn typed<'a, T>(
        &'a self,
        column: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self
            .fields
            .get(column)
            .ok_or_else(|| FieldError::missing(column))?;
        if value.is_null() {
            return Ok(None);
        }
        extract(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(column, expected, value.type_name()))
    }

    /// Reads a text cell.
    pub fn get_string(&self, column: &str) -> Result<Option<&str>, FieldError> {
        self.typed(column, "string", Value::as_str)
    }

    pub fn get_bool(&self, column: &str) -> Result<Option<bool>, FieldError> {
        self.typed(column, "bool", |v| match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, column: &str) -> Result<Option<i64>, FieldError> {
        self.typed(column, "int", |v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Reads a float cell. Integer cells widen to `f64`.
    pub fn get_float(&self, column: &str) -> Result<Option<f64>, FieldError> {
        self.typed(column, "float", |v| match v {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        })
    }

    pub fn get_decimal(&self, column: &str) -> Result<Option<Decimal>, FieldError> {
        self.typed(column, "decimal", |v| match v {
            Value::Decimal(d) => Some(*d),
            _ => None,
        })
    }

    /// Reads a date cell. ISO date strings from JSON count as dates.
    pub fn get_date(&self, column: &str) -> Result<Option<NaiveDate>, FieldError> {
        self.typed(column, "date", |v| match v {
            Value::Date(d) => Some(*d),
            Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            _ => None,
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            id: None,
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
