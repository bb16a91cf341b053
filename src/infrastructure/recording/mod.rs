//! Audio source adapters

pub mod file_source;
pub mod null_source;

pub use file_source::FileAudioSource;
pub use null_source::NullAudioSource;
