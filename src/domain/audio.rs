//! Audio clip value object

use std::fmt;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioMimeType {
    #[default]
    M4a,
    Mp3,
    Wav,
    Ogg,
    Webm,
    Flac,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::M4a => "audio/mp4",
            Self::Mp3 => "audio/mp3",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
            Self::Webm => "audio/webm",
            Self::Flac => "audio/flac",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::M4a => "m4a",
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::Flac => "flac",
        }
    }

    /// Infer the MIME type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "m4a" | "mp4" => Some(Self::M4a),
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One finished recording, ready for transcription
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    mime_type: AudioMimeType,
    duration_ms: Option<u64>,
}

impl AudioClip {
    /// Create a clip from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType, duration_ms: Option<u64>) -> Self {
        Self {
            data,
            mime_type,
            duration_ms,
        }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Recorded duration, when the source knows it
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_as_str() {
        assert_eq!(AudioMimeType::M4a.as_str(), "audio/mp4");
        assert_eq!(AudioMimeType::Wav.as_str(), "audio/wav");
        assert_eq!(AudioMimeType::Flac.as_str(), "audio/flac");
    }

    #[test]
    fn from_extension() {
        assert_eq!(AudioMimeType::from_extension("m4a"), Some(AudioMimeType::M4a));
        assert_eq!(AudioMimeType::from_extension("MP3"), Some(AudioMimeType::Mp3));
        assert_eq!(AudioMimeType::from_extension("txt"), None);
    }

    #[test]
    fn clip_accessors() {
        let clip = AudioClip::new(vec![1, 2, 3], AudioMimeType::Wav, Some(1200));
        assert_eq!(clip.size_bytes(), 3);
        assert_eq!(clip.mime_type(), AudioMimeType::Wav);
        assert_eq!(clip.duration_ms(), Some(1200));
        assert_eq!(clip.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn default_mime_type_is_m4a() {
        assert_eq!(AudioMimeType::default(), AudioMimeType::M4a);
    }
}
