//! Fixed-text transcriber for text input mode
//!
//! Pairs with [`crate::infrastructure::recording::NullAudioSource`]: the
//! utterance text is known up front, so transcription returns it as is.

use async_trait::async_trait;

use crate::application::ports::{Transcriber, Transcript, TranscriptionError};
use crate::domain::audio::AudioClip;

/// Transcriber that returns a predetermined text
pub struct FixedTranscriber {
    text: String,
}

impl FixedTranscriber {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Transcriber for FixedTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(TranscriptionError::EmptyResponse);
        }
        Ok(Transcript {
            text: text.to_string(),
            duration_ms: 0,
        })
    }
}
