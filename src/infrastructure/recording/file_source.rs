//! Pre-recorded file audio source
//!
//! Stands in for a live microphone: `start` checks the file is readable,
//! `stop` loads it. The MIME type comes from the file extension, falling
//! back to m4a for unknown extensions.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{AudioRecorder, RecordingError};
use crate::domain::audio::{AudioClip, AudioMimeType};

/// Audio source backed by a file on disk
pub struct FileAudioSource {
    path: PathBuf,
    armed: Mutex<bool>,
}

impl FileAudioSource {
    /// Create a source for the given audio file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: Mutex::new(false),
        }
    }

    fn mime_type(&self) -> AudioMimeType {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(AudioMimeType::from_extension)
            .unwrap_or_default()
    }
}

#[async_trait]
impl AudioRecorder for FileAudioSource {
    async fn start(&self) -> Result<(), RecordingError> {
        let mut armed = self.armed.lock().await;
        if !self.path.is_file() {
            return Err(RecordingError::StartFailed(format!(
                "no such audio file: {}",
                self.path.display()
            )));
        }
        *armed = true;
        Ok(())
    }

    async fn stop(&self) -> Result<AudioClip, RecordingError> {
        let mut armed = self.armed.lock().await;
        if !*armed {
            return Err(RecordingError::NotRecording);
        }
        *armed = false;

        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RecordingError::ReadFailed(e.to_string()))?;

        Ok(AudioClip::new(data, self.mime_type(), None))
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_as_clip() {
        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(&[1, 2, 3, 4]).unwrap();

        let source = FileAudioSource::new(file.path());
        source.start().await.unwrap();
        let clip = source.stop().await.unwrap();

        assert_eq!(clip.data(), &[1, 2, 3, 4]);
        assert_eq!(clip.mime_type(), AudioMimeType::Wav);
        assert!(clip.duration_ms().is_none());
    }

    #[tokio::test]
    async fn missing_file_fails_on_start() {
        let source = FileAudioSource::new("/nonexistent/clip.m4a");
        assert!(matches!(
            source.start().await,
            Err(RecordingError::StartFailed(_))
        ));
    }

    #[tokio::test]
    async fn stop_without_start_is_not_recording() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0]).unwrap();

        let source = FileAudioSource::new(file.path());
        assert!(matches!(
            source.stop().await,
            Err(RecordingError::NotRecording)
        ));
    }

    #[tokio::test]
    async fn cancel_discards_session() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0]).unwrap();

        let source = FileAudioSource::new(file.path());
        source.start().await.unwrap();
        source.cancel().await.unwrap();

        assert!(matches!(
            source.stop().await,
            Err(RecordingError::NotRecording)
        ));
    }

    #[tokio::test]
    async fn unknown_extension_defaults_to_m4a() {
        let source = FileAudioSource::new("/tmp/clip.dat");
        assert_eq!(source.mime_type(), AudioMimeType::M4a);
    }
}
