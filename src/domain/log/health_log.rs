//! Persisted health log entity

use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::extraction::ExtractedItem;
use crate::domain::log::LogContent;

/// Metadata shared by every log created from one utterance. All rows of a
/// batch carry the same transcript, timestamp, and audio duration.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchMeta {
    pub transcript: String,
    pub audio_duration_ms: Option<u64>,
    pub logged_at: Timestamp,
}

impl BatchMeta {
    /// Batch metadata stamped with the current time
    pub fn now(transcript: impl Into<String>, audio_duration_ms: Option<u64>) -> Self {
        Self {
            transcript: transcript.into(),
            audio_duration_ms,
            logged_at: Timestamp::now(),
        }
    }
}

/// A finalized, stored health log row. Created exactly once per extracted
/// item that survives to persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthLog {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub logged_at: Timestamp,
    pub raw_transcript: String,
    pub audio_duration_ms: Option<u64>,
    pub category: Category,
    pub subcategory: Option<String>,
    pub content: LogContent,
    pub confidence_score: f64,
    pub was_edited: bool,
    pub synced: bool,
}

impl HealthLog {
    /// Turn an extracted item into a storable row using the utterance's
    /// shared metadata. New rows start unedited and unsynced.
    pub fn from_item(item: ExtractedItem, meta: &BatchMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: meta.logged_at,
            logged_at: meta.logged_at,
            raw_transcript: meta.transcript.clone(),
            audio_duration_ms: meta.audio_duration_ms,
            category: item.category,
            subcategory: item.subcategory,
            content: item.content,
            confidence_score: item.confidence,
            was_edited: false,
            synced: false,
        }
    }
}
