//! Extraction port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::extraction::{ClarificationAnswer, ExtractionResult};

/// Extraction transport errors.
///
/// Malformed-but-received responses are not errors: the adapter recovers
/// them locally with [`ExtractionResult::fallback`], so the utterance is
/// never lost. Only failures where no usable response arrived surface here.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Empty transcript")]
    EmptyTranscript,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the language-model extraction service.
///
/// Stateless: all continuity across a clarification round-trip lives in the
/// clarification coordinator.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract structured log items from one transcript.
    ///
    /// # Arguments
    /// * `transcript` - Non-empty utterance text
    /// * `clarification` - Field/answer pair, only on re-extraction after
    ///   the user answered a clarification question
    ///
    /// # Returns
    /// The extraction result; `needs_clarification` is authoritative from
    /// the service and never recomputed locally.
    async fn extract(
        &self,
        transcript: &str,
        clarification: Option<&ClarificationAnswer>,
    ) -> Result<ExtractionResult, ExtractionError>;
}
