//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A scalar cell value held by a [`Record`](super::Record).
///
/// Every value has a display form (its [`Display`](fmt::Display) impl). The
/// global search and column filters match against that display form, and
/// non-numeric values sort by it.
///
/// # Type Mapping
///
/// | JSON input | Rust Variant |
/// |------------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integer | `Int` |
/// | fractional number | `Float` |
/// | string | `String` |
/// | (typed only) | `Decimal`, `Date` |
///
/// # Example
///
/// ```
/// use roster_lib::model::Value;
///
/// let name = Value::from("Jane Smith");
/// let id = Value::from(42i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
///
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(empty.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value (also used for enumerated statuses).
    String(String),
    /// Calendar date, displayed as `YYYY-MM-DD`.
    Date(NaiveDate),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for integer, float and decimal values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Decimal(_))
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
        }
    }

    /// Returns the string payload without coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a JSON scalar into a value.
    ///
    /// Integers that fit in `i64` become `Int`, other numbers `Float`. Arrays
    /// and objects are not scalars; they are kept as their compact JSON text.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::String(other.to_string()),
        }
    }

    /// Compares two values the way table columns sort.
    ///
    /// Values fall into three classes, ordered null, then numbers, then
    /// everything else. Numbers compare by value across int, float and
    /// decimal; the last class compares display strings case-sensitively.
    /// The result is a total order, so mixed columns sort without panicking.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        let rank = |v: &Value| match v {
            Value::Null => 0u8,
            v if v.is_numeric() => 1,
            _ => 2,
        };
        rank(self)
            .cmp(&rank(other))
            .then_with(|| match (self.number(), other.number()) {
                (Some(a), Some(b)) => a.compare(&b),
                _ if self.is_null() => Ordering::Equal,
                _ => self.to_string().cmp(&other.to_string()),
            })
    }

    fn number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Exact(Decimal::from(*n))),
            Value::Decimal(d) => Some(Number::Exact(*d)),
            Value::Float(f) => Some(Number::from_f64(*f)),
            _ => None,
        }
    }
}

/// Sort key of a numeric cell.
///
/// Every int and decimal, and every float within decimal range, compares
/// as a `Decimal`. Floats beyond that range sit below or above all of
/// them; NaN sorts last.
#[derive(Debug, Clone, Copy)]
enum Number {
    Below(f64),
    Exact(Decimal),
    Above(f64),
    NaN,
}

impl Number {
    fn from_f64(f: f64) -> Self {
        if f.is_nan() {
            return Number::NaN;
        }
        if f.abs() < 1.0 {
            return Number::Exact(Decimal::from_f64_retain(f).unwrap_or(Decimal::ZERO));
        }
        match Decimal::from_f64_retain(f) {
            Some(d) => Number::Exact(d),
            None if f < 0.0 => Number::Below(f),
            None => Number::Above(f),
        }
    }

    fn class(&self) -> u8 {
        match self {
            Number::Below(_) => 0,
            Number::Exact(_) => 1,
            Number::Above(_) => 2,
            Number::NaN => 3,
        }
    }

    fn compare(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => a.cmp(b),
            (Number::Below(a), Number::Below(b)) | (Number::Above(a), Number::Above(b)) => {
                a.total_cmp(b)
            }
            _ => self.class().cmp(&other.class()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
