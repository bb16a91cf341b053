//! Extraction result value objects
//!
//! These types exist only between extraction and persistence. An
//! [`ExtractedItem`] is a candidate log; it becomes a stored
//! [`crate::domain::log::HealthLog`] once its utterance is finalized.

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::log::LogContent;

/// Confidence assigned to the fallback item when the extraction response
/// cannot be parsed.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// One candidate log extracted from an utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedItem {
    pub category: Category,
    pub subcategory: Option<String>,
    pub content: LogContent,
    /// In [0, 1]; authoritative from the extraction service
    pub confidence: f64,
    /// The part of the transcript that justifies this item
    pub original_text: String,
}

/// A single targeted follow-up question for an ambiguous extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationRequest {
    /// Name of the ambiguous attribute
    pub field: String,
    /// Question to present to the user
    pub question: String,
}

/// The user's answer to a [`ClarificationRequest`], sent back with the
/// original transcript on re-extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarificationAnswer {
    pub field: String,
    pub answer: String,
}

/// Outcome of one extraction call. Items already resolved in the same
/// utterance travel alongside the clarification request and must not be
/// dropped while the answer is pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub items: Vec<ExtractedItem>,
    pub needs_clarification: Option<ClarificationRequest>,
}

impl ExtractionResult {
    /// Degrade-to-safe result for a malformed extraction response: the
    /// utterance is preserved verbatim as a single "overig" item rather
    /// than being lost.
    pub fn fallback(transcript: &str) -> Self {
        Self {
            items: vec![ExtractedItem {
                category: Category::Overig,
                subcategory: None,
                content: LogContent::fallback(transcript),
                confidence: FALLBACK_CONFIDENCE,
                original_text: transcript.to_string(),
            }],
            needs_clarification: None,
        }
    }
}
