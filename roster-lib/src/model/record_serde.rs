//! Serialization for Record and loading rows from JSON.
//!
//! A record serializes as a flat JSON object of its fields in insertion
//! order, which is also the shape rows arrive in from the REST backend or a
//! static fixture:
//!
//! ```json
//! [
//!   { "id": "EMP001", "name": "John Doe", "department": "IT" },
//!   { "id": "EMP002", "name": "Jane Smith", "department": "HR" }
//! ]
//! ```
//!
//! The record id is not written as a separate entry; sources that need it
//! carry it as a field, and [`load_rows_json`] copies it back from there.

use std::fmt;
use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;
use crate::error::LoadError;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object of column values")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }
        Ok(Record { id: None, fields })
    }
}

// =============================================================================
// Loading
// =============================================================================

impl Record {
    /// Builds a record from a JSON object, taking the id from `id_field`.
    ///
    /// The id field stays in the record as a regular column.
    pub fn from_json_object(
        object: serde_json::Map<String, serde_json::Value>,
        id_field: Option<&str>,
    ) -> Self {
        let mut record = Record::new();
        for (key, value) in object {
            record.insert(key, Value::from_json(value));
        }
        if let Some(id_field) = id_field
            && let Some(value) = record.get(id_field)
            && !value.is_null()
        {
            record.id = Some(value.to_string());
        }
        record
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Parses a JSON array of flat objects into records.
///
/// `id_field` names the column holding each row's identity (e.g. `"id"` for
/// employees, `"bankId"` for banks).
///
/// # Example
///
/// ```
/// use roster_lib::model::load_rows_json;
///
/// let rows = load_rows_json(r#"[{"bankId": 1, "bankName": "Indian Bank"}]"#, Some("bankId")).unwrap();
/// assert_eq!(rows[0].id(), Some("1"));
/// ```
pub fn load_rows_json(input: &str, id_field: Option<&str>) -> Result<Vec<Record>, LoadError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    rows_from_json(json, id_field)
}

/// Reads a JSON array of flat objects from a reader.
pub fn read_rows_json(mut reader: impl Read, id_field: Option<&str>) -> Result<Vec<Record>, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    load_rows_json(&input, id_field)
}

fn rows_from_json(json: serde_json::Value, id_field: Option<&str>) -> Result<Vec<Record>, LoadError> {
    let serde_json::Value::Array(items) = json else {
        return Err(LoadError::NotAnArray(json_type_name(&json)));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            serde_json::Value::Object(object) => {
                rows.push(Record::from_json_object(object, id_field));
            }
            other => {
                return Err(LoadError::NotAnObject {
                    index,
                    actual: json_type_name(&other),
                });
            }
        }
    }

    log::debug!("[rows] loaded {} rows from JSON", rows.len());
    Ok(rows)
}
