//! Durable slot storage
//!
//! Each store owns one named slot holding its whole serialized collection
//! as a JSON text file under the data directory.
//!
//! Example: slot "clients" is stored at "<root>/clients.json"

use crate::config::MAX_SLOT_BYTES;
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File-backed named slot store
#[derive(Clone)]
pub struct SlotStore {
    root: PathBuf,
    max_slot_bytes: usize,
}

impl SlotStore {
    /// Create a new slot store at the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_slot_bytes: MAX_SLOT_BYTES,
        }
    }

    /// Override the per-slot quota (used by tests)
    pub fn with_max_slot_bytes(mut self, max_slot_bytes: usize) -> Self {
        self.max_slot_bytes = max_slot_bytes;
        self
    }

    /// Initialize the slot store (create directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Slot store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Read a slot's contents. A missing slot is `None`, never an error.
    pub async fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;

        tracing::debug!("Read slot: {} ({} bytes)", slot, contents.len());

        Ok(Some(contents))
    }

    /// Overwrite a slot's contents.
    ///
    /// The write goes through a temp file and a rename, so a crash
    /// mid-write leaves either the old contents or the new ones, never a
    /// torn slot. Contents over the quota fail before touching the file.
    pub async fn write(&self, slot: &str, contents: &str) -> Result<()> {
        if contents.len() > self.max_slot_bytes {
            return Err(AppError::StorageQuotaExceeded {
                slot: slot.to_string(),
                size: contents.len(),
                limit: self.max_slot_bytes,
            });
        }

        let path = self.slot_path(slot);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote slot: {} ({} bytes)", slot, contents.len());

        Ok(())
    }

    /// Remove a slot. Already-absent slots are fine.
    pub async fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).await?;

        tracing::debug!("Removed slot: {}", slot);

        Ok(())
    }

    /// Check whether a slot exists on disk
    pub async fn exists(&self, slot: &str) -> Result<bool> {
        Ok(self.slot_path(slot).exists())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }

    /// Get the slot store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (SlotStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path().join("store"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let (store, _temp) = create_test_store().await;

        store.write("clients", r#"[{"id":"1"}]"#).await.unwrap();

        let contents = store.read("clients").await.unwrap();
        assert_eq!(contents.as_deref(), Some(r#"[{"id":"1"}]"#));
    }

    #[tokio::test]
    async fn test_missing_slot_reads_none() {
        let (store, _temp) = create_test_store().await;

        let contents = store.read("reminders").await.unwrap();
        assert!(contents.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_contents() {
        let (store, _temp) = create_test_store().await;

        store.write("settings", "{}").await.unwrap();
        store.write("settings", r#"{"theme":"DARK"}"#).await.unwrap();

        let contents = store.read("settings").await.unwrap();
        assert_eq!(contents.as_deref(), Some(r#"{"theme":"DARK"}"#));
    }

    #[tokio::test]
    async fn test_quota_exceeded() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path().join("store")).with_max_slot_bytes(16);
        store.initialize().await.unwrap();

        let result = store.write("photo_trackings", &"x".repeat(32)).await;

        assert!(matches!(
            result,
            Err(AppError::StorageQuotaExceeded { size: 32, limit: 16, .. })
        ));
        assert!(!store.exists("photo_trackings").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (store, _temp) = create_test_store().await;

        store.write("plannings", "[]").await.unwrap();
        store.remove("plannings").await.unwrap();
        store.remove("plannings").await.unwrap();

        assert!(!store.exists("plannings").await.unwrap());
    }
}
