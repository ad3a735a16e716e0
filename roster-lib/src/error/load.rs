//! Errors raised while loading row fixtures

/// Errors that can occur while turning JSON input into records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value was not an array of rows.
    #[error("Expected a JSON array of rows, got {0}")]
    NotAnArray(&'static str),

    /// A row in the array was not a JSON object.
    #[error("Row {index} is not a JSON object (got {actual})")]
    NotAnObject { index: usize, actual: &'static str },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
