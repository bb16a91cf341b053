//! Clarification coordinator
//!
//! Owns the one-slot pending state of an utterance whose extraction raised
//! a clarification question. Items already resolved in that extraction are
//! held here, not persisted, so that the utterance still yields a single
//! atomic batch once the question is answered, skipped, or abandoned.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::extraction::{
    ClarificationAnswer, ClarificationRequest, ExtractedItem, ExtractionResult,
};

use super::ports::{ExtractionError, Extractor};

/// Errors from the clarification coordinator
#[derive(Debug, Error)]
pub enum ClarificationError {
    #[error("No clarification is pending")]
    NoPending,

    #[error("A clarification is already pending for a previous utterance")]
    AlreadyPending,

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// State held across a clarification round-trip
#[derive(Debug, Clone)]
struct PendingUtterance {
    transcript: String,
    clarification: ClarificationRequest,
    items: Vec<ExtractedItem>,
}

/// What the coordinator decided about a fresh extraction result
#[derive(Debug, Clone, PartialEq)]
pub enum ClarificationOutcome {
    /// No clarification needed; the items are final
    Final(Vec<ExtractedItem>),
    /// The utterance is held; this question must be put to the user
    Question(ClarificationRequest),
}

/// An utterance taken out of the pending slot by `abandon`. Carries the
/// original question so the slot can be reinstated if persisting the
/// held items fails.
#[derive(Debug, Clone)]
pub struct AbandonedUtterance {
    /// The utterance transcript the items belong to
    pub transcript: String,
    /// The question that was never answered
    pub clarification: ClarificationRequest,
    /// Items held since the original extraction
    pub items: Vec<ExtractedItem>,
}

/// One utterance's finalized batch, handed back when a pending
/// clarification resolves
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBatch {
    /// The utterance transcript the batch belongs to
    pub transcript: String,
    /// Held items first, re-extraction items appended
    pub items: Vec<ExtractedItem>,
    /// A second clarification request raised by the re-extraction.
    /// Nested clarification is not supported; the request is reported to
    /// the caller instead of being silently dropped, but its items are
    /// still part of the batch.
    pub ignored_followup: Option<ClarificationRequest>,
}

/// Coordinator for the clarification round-trip.
///
/// At most one pending utterance exists at a time; the session controller
/// serializes utterances, so observing a new result while one is pending
/// is an error rather than a supported operation.
pub struct ClarificationCoordinator<E: Extractor> {
    extractor: Arc<E>,
    pending: Mutex<Option<PendingUtterance>>,
}

impl<E: Extractor> ClarificationCoordinator<E> {
    /// Create a coordinator with no pending utterance
    pub fn new(extractor: Arc<E>) -> Self {
        Self {
            extractor,
            pending: Mutex::new(None),
        }
    }

    /// Whether an utterance is waiting on a clarification answer
    pub async fn has_pending(&self) -> bool {
        self.pending.lock().await.is_some()
    }

    /// The outstanding question, if any
    pub async fn pending_question(&self) -> Option<ClarificationRequest> {
        self.pending
            .lock()
            .await
            .as_ref()
            .map(|p| p.clarification.clone())
    }

    /// Decide what to do with a fresh extraction result.
    ///
    /// A result without a clarification request is final. Otherwise the
    /// transcript, the question, and any already-resolved items are held
    /// until the user answers or skips.
    pub async fn observe(
        &self,
        transcript: &str,
        result: ExtractionResult,
    ) -> Result<ClarificationOutcome, ClarificationError> {
        let Some(clarification) = result.needs_clarification else {
            return Ok(ClarificationOutcome::Final(result.items));
        };

        let mut pending = self.pending.lock().await;
        if pending.is_some() {
            return Err(ClarificationError::AlreadyPending);
        }
        *pending = Some(PendingUtterance {
            transcript: transcript.to_string(),
            clarification: clarification.clone(),
            items: result.items,
        });

        Ok(ClarificationOutcome::Question(clarification))
    }

    /// Resolve the pending utterance with the user's answer.
    ///
    /// Re-extracts the original transcript with the field/answer pair and
    /// concatenates held items with the re-extraction's items into one
    /// batch. If the re-extraction call fails, the pending state is put
    /// back so the answer can be retried or skipped.
    pub async fn answer(&self, answer: &str) -> Result<ResolvedBatch, ClarificationError> {
        let held = self
            .pending
            .lock()
            .await
            .take()
            .ok_or(ClarificationError::NoPending)?;

        let clarification = ClarificationAnswer {
            field: held.clarification.field.clone(),
            answer: answer.to_string(),
        };

        let result = match self
            .extractor
            .extract(&held.transcript, Some(&clarification))
            .await
        {
            Ok(result) => result,
            Err(e) => {
                *self.pending.lock().await = Some(held);
                return Err(e.into());
            }
        };

        let mut items = held.items;
        items.extend(result.items);

        Ok(ResolvedBatch {
            transcript: held.transcript,
            items,
            ignored_followup: result.needs_clarification,
        })
    }

    /// Resolve the pending utterance without an answer.
    ///
    /// The held items become the batch as-is; the ambiguous field keeps
    /// whatever partial value the original extraction produced. No second
    /// extraction call is made.
    pub async fn skip(&self) -> Result<ResolvedBatch, ClarificationError> {
        let held = self
            .pending
            .lock()
            .await
            .take()
            .ok_or(ClarificationError::NoPending)?;

        Ok(ResolvedBatch {
            transcript: held.transcript,
            items: held.items,
            ignored_followup: None,
        })
    }

    /// Abandon the pending utterance (e.g. a new recording started).
    /// Skip-equivalent: held items are returned for persistence, never
    /// silently dropped. Returns None when nothing was pending.
    pub async fn abandon(&self) -> Option<AbandonedUtterance> {
        self.pending.lock().await.take().map(|p| AbandonedUtterance {
            transcript: p.transcript,
            clarification: p.clarification,
            items: p.items,
        })
    }

    /// Put an abandoned utterance back into the pending slot. Used when
    /// persisting its items fails, mirroring how `answer` restores the
    /// slot on a failed re-extraction.
    pub async fn reinstate(&self, utterance: AbandonedUtterance) {
        *self.pending.lock().await = Some(PendingUtterance {
            transcript: utterance.transcript,
            clarification: utterance.clarification,
            items: utterance.items,
        });
    }
}
