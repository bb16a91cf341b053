//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HealthVoice - voice-driven health logging
#[derive(Parser, Debug)]
#[command(name = "health-voice")]
#[command(version = "0.1.0")]
#[command(about = "Log voeding, supplementen, beweging, slaap en welzijn door te spreken")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio file with the spoken log (m4a, mp3, wav, ogg, webm, flac)
    #[arg(value_name = "AUDIO_FILE", conflicts_with = "text")]
    pub audio: Option<PathBuf>,

    /// Process text directly instead of an audio file
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Extraction model
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Spoken language hint for transcription (ISO 639-1)
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// Log store file (JSONL)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Save items as-is when the extractor asks a follow-up question
    #[arg(long)]
    pub skip_clarification: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// What to run one utterance from
#[derive(Debug, Clone)]
pub enum InputSource {
    Audio(PathBuf),
    Text(String),
}

/// Parsed processing options
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: InputSource,
    pub skip_clarification: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "anthropic_api_key",
    "openai_api_key",
    "model",
    "language",
    "store_path",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
