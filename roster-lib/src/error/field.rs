//! Typed cell access errors

/// Error returned by the typed `Record::get_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The row has no such column.
    #[error("row has no column '{column}'")]
    Missing { column: String },

    /// The cell holds a value of another kind.
    #[error("column '{column}' holds {actual}, not {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(column: impl Into<String>) -> Self {
        Self::Missing {
            column: column.into(),
        }
    }

    pub fn type_mismatch(column: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// The column the failed access asked for.
    pub fn column(&self) -> &str {
        match self {
            Self::Missing { column } | Self::TypeMismatch { column, .. } => column,
        }
    }
}
