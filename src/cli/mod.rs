//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the main application
//! runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_process, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, InputSource, ProcessOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
