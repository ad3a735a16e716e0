//! In-process draft backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::DraftBackend;
use crate::error::DraftError;

/// Keeps drafts in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, DraftError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn write(&self, key: &str, value: Vec<u8>) -> Result<(), DraftError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, DraftError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }
}
