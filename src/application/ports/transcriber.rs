//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioClip;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty transcription response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Result of transcribing one audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The transcribed text
    pub text: String,
    /// Round-trip time of the transcription call
    pub duration_ms: u64,
}

/// Port for speech-to-text transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio clip to text.
    ///
    /// # Arguments
    /// * `clip` - The finished recording
    ///
    /// # Returns
    /// The transcript or an error
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError>;
}
