//! Transcription adapters

pub mod fixed;
pub mod whisper;

pub use fixed::FixedTranscriber;
pub use whisper::WhisperTranscriber;
