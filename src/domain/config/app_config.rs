//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default transcription language (Dutch)
pub const DEFAULT_LANGUAGE: &str = "nl";

/// Default extraction model
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Anthropic API key for extraction
    pub anthropic_api_key: Option<String>,
    /// OpenAI API key for transcription
    pub openai_api_key: Option<String>,
    /// Extraction model name
    pub model: Option<String>,
    /// Spoken language passed to the transcriber
    pub language: Option<String>,
    /// Path of the JSONL log store
    pub store_path: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            anthropic_api_key: None,
            openai_api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            store_path: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            anthropic_api_key: other.anthropic_api_key.or(self.anthropic_api_key),
            openai_api_key: other.openai_api_key.or(self.openai_api_key),
            model: other.model.or(self.model),
            language: other.language.or(self.language),
            store_path: other.store_path.or(self.store_path),
        }
    }

    /// Get the extraction model, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the transcription language, or Dutch if not set
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}
