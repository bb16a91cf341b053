//! Extraction adapters

pub mod claude;

pub use claude::ClaudeExtractor;
