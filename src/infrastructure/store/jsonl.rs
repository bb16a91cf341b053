//! JSONL log store adapter
//!
//! Appends one JSON object per line to a local file. A batch is written in
//! one append: every row is serialized before the first byte hits disk, so
//! a serialization failure leaves the store untouched.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{LogStore, StorageError};
use crate::domain::extraction::ExtractedItem;
use crate::domain::log::{BatchMeta, HealthLog};

/// File name used when no store path is configured
pub const DEFAULT_STORE_FILE: &str = "logs.jsonl";

/// Append-only JSONL health log store
pub struct JsonlLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlLogStore {
    /// Create a store writing to the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Default store location under the user's data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("health-voice")
            .join(DEFAULT_STORE_FILE)
    }

    /// The file this store writes to
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl LogStore for JsonlLogStore {
    async fn create_batch(
        &self,
        items: Vec<ExtractedItem>,
        meta: &BatchMeta,
    ) -> Result<Vec<HealthLog>, StorageError> {
        let logs: Vec<HealthLog> = items
            .into_iter()
            .map(|item| HealthLog::from_item(item, meta))
            .collect();

        let mut buffer = String::new();
        for log in &logs {
            let line = serde_json::to_string(log)
                .map_err(|e| StorageError::SerializeFailed(e.to_string()))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        file.write_all(buffer.as_bytes())
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::log::LogContent;

    fn sample_item(text: &str) -> ExtractedItem {
        ExtractedItem {
            category: Category::Overig,
            subcategory: None,
            content: LogContent::fallback(text),
            confidence: 0.3,
            original_text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn writes_one_line_per_item() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLogStore::new(dir.path().join("logs.jsonl"));
        let meta = BatchMeta::now("dronk water en at een appel", Some(3000));

        let logs = store
            .create_batch(
                vec![sample_item("dronk water"), sample_item("at een appel")],
                &meta,
            )
            .await
            .unwrap();

        assert_eq!(logs.len(), 2);

        let content = std::fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["raw_transcript"], "dronk water en at een appel");
            assert_eq!(value["audio_duration_ms"], 3000);
            assert_eq!(value["synced"], false);
        }
    }

    #[tokio::test]
    async fn appends_across_batches() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLogStore::new(dir.path().join("logs.jsonl"));

        store
            .create_batch(vec![sample_item("a")], &BatchMeta::now("a", None))
            .await
            .unwrap();
        store
            .create_batch(vec![sample_item("b")], &BatchMeta::now("b", None))
            .await
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLogStore::new(dir.path().join("nested/deeper/logs.jsonl"));

        store
            .create_batch(vec![sample_item("x")], &BatchMeta::now("x", None))
            .await
            .unwrap();

        assert!(store.path().is_file());
    }

    #[tokio::test]
    async fn empty_batch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLogStore::new(dir.path().join("logs.jsonl"));

        let logs = store
            .create_batch(Vec::new(), &BatchMeta::now("niks", None))
            .await
            .unwrap();

        assert!(logs.is_empty());
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.is_empty());
    }
}
