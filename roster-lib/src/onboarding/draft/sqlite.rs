//! SQLite draft backend with in-memory cache.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use dashmap::DashMap;
use rusqlite::OptionalExtension;

use super::DraftBackend;
use crate::error::DraftError;

/// SQLite-backed draft storage with DashMap cache.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Open (or create) the draft database at `path`.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, DraftError> {
        let path = path.as_ref();
        log::debug!("[drafts] opening {}", path.display());
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS drafts (
                        key TEXT PRIMARY KEY,
                        value BLOB NOT NULL,
                        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )",
                    [],
                )
            })
            .await?;

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

#[async_trait]
impl DraftBackend for SqliteBackend {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, DraftError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let lookup = key.to_string();
        let stored: Option<Vec<u8>> = self
            .client
            .conn(move |conn| {
                conn.query_row("SELECT value FROM drafts WHERE key = ?1", [&lookup], |row| row.get(0))
                    .optional()
            })
            .await?;

        if let Some(bytes) = &stored {
            log::trace!("[drafts] cached {} from disk", key);
            self.cache.insert(key.to_string(), bytes.clone());
        }
        Ok(stored)
    }

    async fn write(&self, key: &str, value: Vec<u8>) -> Result<(), DraftError> {
        let row_key = key.to_string();
        let row_value = value.clone();
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO drafts (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET
                        value = excluded.value,
                        updated_at = CURRENT_TIMESTAMP",
                    rusqlite::params![row_key, row_value],
                )
            })
            .await?;

        self.cache.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftError> {
        let row_key = key.to_string();
        let removed = self
            .client
            .conn(move |conn| conn.execute("DELETE FROM drafts WHERE key = ?1", [&row_key]))
            .await?;

        self.cache.remove(key);
        log::trace!("[drafts] deleted {} row(s) for {}", removed, key);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, DraftError> {
        let pattern = format!("{}%", prefix);
        self.client
            .conn(move |conn| {
                let mut stmt = conn.prepare("SELECT key FROM drafts WHERE key LIKE ? ORDER BY key")?;
                let rows = stmt.query_map([&pattern], |row| row.get(0))?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await
            .map_err(DraftError::from)
    }
}
