//! Domain error types

use thiserror::Error;

/// Error when an unknown category tag is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid category: \"{input}\". Valid categories are: voeding, supplement, beweging, slaap, welzijn, overig")]
pub struct InvalidCategoryError {
    pub input: String,
}

/// Error when a log payload does not match its declared category
#[derive(Debug, Clone, Error)]
pub enum PayloadError {
    #[error("Payload for category '{category}' is not a JSON object")]
    NotAnObject { category: String },

    #[error("Payload for category '{category}' is missing required field '{field}'")]
    MissingField {
        category: String,
        field: &'static str,
    },

    #[error("Payload field '{field}' has invalid value: {message}")]
    InvalidField { field: &'static str, message: String },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
