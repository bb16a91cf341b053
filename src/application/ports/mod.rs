//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod extractor;
pub mod log_store;
pub mod recorder;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use extractor::{ExtractionError, Extractor};
pub use log_store::{LogStore, StorageError};
pub use recorder::{AudioRecorder, RecordingError};
pub use transcriber::{Transcriber, Transcript, TranscriptionError};
