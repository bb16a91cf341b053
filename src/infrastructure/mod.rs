//! Infrastructure layer - Adapters for external services

pub mod config;
pub mod extraction;
pub mod recording;
pub mod store;
pub mod transcription;

pub use config::XdgConfigStore;
pub use extraction::ClaudeExtractor;
pub use recording::{FileAudioSource, NullAudioSource};
pub use store::JsonlLogStore;
pub use transcription::{FixedTranscriber, WhisperTranscriber};
