//! No-op audio source for text input mode
//!
//! When the utterance arrives as text there is no audio to capture; this
//! source satisfies the capture port with an empty clip.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{AudioRecorder, RecordingError};
use crate::domain::audio::{AudioClip, AudioMimeType};

/// Audio source that records nothing
#[derive(Default)]
pub struct NullAudioSource {
    armed: Mutex<bool>,
}

impl NullAudioSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AudioRecorder for NullAudioSource {
    async fn start(&self) -> Result<(), RecordingError> {
        *self.armed.lock().await = true;
        Ok(())
    }

    async fn stop(&self) -> Result<AudioClip, RecordingError> {
        let mut armed = self.armed.lock().await;
        if !*armed {
            return Err(RecordingError::NotRecording);
        }
        *armed = false;
        Ok(AudioClip::new(Vec::new(), AudioMimeType::default(), None))
    }

    async fn cancel(&self) -> Result<(), RecordingError> {
        let mut armed = self.armed.lock().await;
        if !*armed {
            return Err(RecordingError::NotRecording);
        }
        *armed = false;
        Ok(())
    }
}
