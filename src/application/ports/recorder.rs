//! Audio capture port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioClip;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Microphone access denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Failed to read recorded audio: {0}")]
    ReadFailed(String),

    #[error("No recording in progress")]
    NotRecording,
}

/// Port for the audio capture collaborator.
///
/// One capture session at a time: `start` begins it, `stop` yields the
/// finished clip, `cancel` discards in-progress audio.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    /// Begin an audio capture session.
    async fn start(&self) -> Result<(), RecordingError>;

    /// Finish the capture session and return the recorded clip.
    async fn stop(&self) -> Result<AudioClip, RecordingError>;

    /// Discard the capture session without producing a clip.
    async fn cancel(&self) -> Result<(), RecordingError>;
}
