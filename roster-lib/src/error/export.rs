//! Export error types

/// Errors that can occur while exporting a table view.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing or creating the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
