//! Onboarding drafts
//!
//! A [`Draft`] is a saved, unfinished wizard. [`DraftStore`] encodes drafts
//! with bincode and keeps them in any [`DraftBackend`].

mod backend;
mod memory;
mod sqlite;

pub use backend::DraftBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::EmployeeForm;
use super::Step;
use crate::error::DraftError;

const KEY_PREFIX: &str = "draft:";

/// A saved, unfinished onboarding wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    pub step: Step,
    pub form: EmployeeForm,
    pub saved_at: DateTime<Utc>,
}

/// Typed draft storage.
///
/// Wraps a `DraftBackend` with bincode serialization.
#[derive(Clone)]
pub struct DraftStore {
    backend: Arc<dyn DraftBackend>,
}

fn key(id: Uuid) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

impl DraftStore {
    /// Create a draft store with the given backend.
    pub fn new(backend: impl DraftBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Save `draft`, replacing any earlier draft with the same id.
    pub async fn save(&self, draft: &Draft) -> Result<(), DraftError> {
        let bytes = bincode::serialize(draft).map_err(DraftError::Serialization)?;
        log::debug!("[drafts] saving {} ({} bytes)", draft.id, bytes.len());
        self.backend.write(&key(draft.id), bytes).await
    }

    /// Load the draft with `id`.
    pub async fn load(&self, id: Uuid) -> Result<Option<Draft>, DraftError> {
        match self.backend.read(&key(id)).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(DraftError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Delete the draft with `id`, typically after the wizard completes.
    pub async fn discard(&self, id: Uuid) -> Result<(), DraftError> {
        log::debug!("[drafts] discarding {}", id);
        self.backend.remove(&key(id)).await
    }

    /// Ids of all stored drafts.
    pub async fn ids(&self) -> Result<Vec<Uuid>, DraftError> {
        let keys = self.backend.keys(KEY_PREFIX).await?;
        Ok(keys
            .iter()
            .filter_map(|k| k.strip_prefix(KEY_PREFIX))
            .filter_map(|id| match Uuid::parse_str(id) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("[drafts] skipping malformed key '{}': {}", id, e);
                    None
                }
            })
            .collect())
    }

    /// All stored drafts, most recently saved first.
    pub async fn list(&self) -> Result<Vec<Draft>, DraftError> {
        let mut drafts = Vec::new();
        for id in self.ids().await? {
            if let Some(draft) = self.load(id).await? {
                drafts.push(draft);
            }
        }
        drafts.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(drafts)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn draft(name: &str, saved_at: DateTime<Utc>) -> Draft {
        Draft {
            id: Uuid::new_v4(),
            step: Step::Documents,
            form: EmployeeForm {
                full_name: name.into(),
                ..Default::default()
            },
            saved_at,
        }
    }

    #[tokio::test]
    async fn test_save_load_discard() {
        let store = DraftStore::in_memory();
        let saved = draft("John Doe", Utc::now());

        store.save(&saved).await.unwrap();
        assert_eq!(store.load(saved.id).await.unwrap(), Some(saved.clone()));

        store.discard(saved.id).await.unwrap();
        assert_eq!(store.load(saved.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = DraftStore::in_memory();
        let older = draft("Old", Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        let newer = draft("New", Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap());
        store.save(&older).await.unwrap();
        store.save(&newer).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.form.full_name)
            .collect();
        assert_eq!(names, ["New", "Old"]);
    }

    #[tokio::test]
    async fn test_corrupt_bytes_fail_to_deserialize() {
        let backend = MemoryBackend::new();
        let id = Uuid::new_v4();
        backend.write(&key(id), vec![1, 2, 3]).await.unwrap();
        let store = DraftStore::new(backend);

        assert!(matches!(
            store.load(id).await,
            Err(DraftError::Deserialization(_))
        ));
    }
}
