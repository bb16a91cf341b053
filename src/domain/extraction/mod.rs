//! Extraction value objects

pub mod result;
pub mod system_prompt;

pub use result::{
    ClarificationAnswer, ClarificationRequest, ExtractedItem, ExtractionResult, FALLBACK_CONFIDENCE,
};
pub use system_prompt::SystemPrompt;
