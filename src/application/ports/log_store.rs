//! Persistence port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::extraction::ExtractedItem;
use crate::domain::log::{BatchMeta, HealthLog};

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to write logs: {0}")]
    WriteFailed(String),

    #[error("Failed to serialize log: {0}")]
    SerializeFailed(String),
}

/// Port for health log persistence.
///
/// Persistence is all-or-nothing per utterance: every finalized item of an
/// utterance is stored in one `create_batch` call.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Persist one utterance's items as health log rows.
    ///
    /// # Arguments
    /// * `items` - The finalized extracted items, in order
    /// * `meta` - Transcript, timestamp, and audio duration shared by the batch
    ///
    /// # Returns
    /// The stored rows, in the same order as `items`
    async fn create_batch(
        &self,
        items: Vec<ExtractedItem>,
        meta: &BatchMeta,
    ) -> Result<Vec<HealthLog>, StorageError>;
}
