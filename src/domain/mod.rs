//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod category;
pub mod config;
pub mod error;
pub mod extraction;
pub mod log;
pub mod session;

// Re-export common types
pub use audio::{AudioClip, AudioMimeType};
pub use category::Category;
pub use config::AppConfig;
pub use error::*;
pub use extraction::{
    ClarificationAnswer, ClarificationRequest, ExtractedItem, ExtractionResult, SystemPrompt,
};
pub use log::{BatchMeta, HealthLog, LogContent};
pub use session::{InvalidStateTransition, RecordingSession, RecordingState};
