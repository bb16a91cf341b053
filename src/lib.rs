//! HealthVoice - voice-driven personal health logging
//!
//! This crate turns one spoken utterance into structured health log entries:
//! audio is transcribed (OpenAI Whisper), the transcript is parsed into typed
//! log items by a language model (Anthropic Claude), ambiguous extractions go
//! through a single clarification round-trip, and the finalized items are
//! persisted as one batch.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Categories, log payloads, extraction results, session state machine
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Claude, Whisper, JSONL store, etc.)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
