//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::extraction::ClarificationRequest;
use crate::domain::log::HealthLog;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one saved log as a card line
    pub fn log_card(&self, log: &HealthLog) {
        let label = match &log.subcategory {
            Some(sub) => format!("{} · {}", log.category.label_dutch(), sub),
            None => log.category.label_dutch().to_string(),
        };
        println!(
            "{} {}  {}  {}",
            log.category.emoji(),
            label.bold(),
            log.content.summary(),
            format_confidence(log.confidence_score).dimmed()
        );
    }

    /// Print the batch of saved logs
    pub fn saved_batch(&self, logs: &[HealthLog]) {
        if logs.is_empty() {
            self.info("Niets te loggen gevonden");
            return;
        }
        for log in logs {
            self.log_card(log);
        }
        self.success(&format!(
            "{} log{} opgeslagen",
            logs.len(),
            if logs.len() == 1 { "" } else { "s" }
        ));
    }

    /// Print a clarification question
    pub fn clarification_question(&self, request: &ClarificationRequest) {
        eprintln!(
            "{} {} {}",
            "?".yellow().bold(),
            request.question.bold(),
            format!("[{}]", request.field).dimmed()
        );
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a confidence score as a percentage
pub fn format_confidence(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as u32)
}
