//! Draft storage error types

/// Errors from the onboarding draft store and its backends.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// The SQLite backend failed to open, query or write.
    #[error("draft storage error: {0}")]
    Database(#[from] async_sqlite::Error),

    #[error("cannot encode draft: {0}")]
    Serialization(bincode::Error),

    /// Stored bytes are not a draft, typically written by an older layout.
    #[error("cannot decode stored draft: {0}")]
    Deserialization(bincode::Error),
}
