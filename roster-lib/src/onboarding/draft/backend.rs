//! Where saved onboarding drafts live.

use async_trait::async_trait;

use crate::error::DraftError;

/// Storage slot for encoded drafts, one blob per draft key.
///
/// A backend never looks inside a blob. [`DraftStore`](super::DraftStore)
/// picks the keys and does the bincode encoding, so the in-memory and
/// SQLite backends stay interchangeable.
#[async_trait]
pub trait DraftBackend: Send + Sync {
    /// The saved blob for `key`, or `None` if nothing was saved under it.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, DraftError>;

    /// Saves `value` under `key`, replacing an earlier save.
    async fn write(&self, key: &str, value: Vec<u8>) -> Result<(), DraftError>;

    /// Discards the blob under `key`. A key that was never saved is fine.
    async fn remove(&self, key: &str) -> Result<(), DraftError>;

    /// Every saved key starting with `prefix`, in no particular order.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, DraftError>;
}
