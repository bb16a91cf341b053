//! Persistence adapters

pub mod jsonl;

pub use jsonl::JsonlLogStore;
