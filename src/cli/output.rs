//! Output formatting for the CLI
//!
//! Human-readable colored text by default, JSON with `--json`.

use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Prints results and messages in the selected format
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter
    ///
    /// `no_color` disables ANSI colors process-wide.
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    /// Errors always go to stderr, also in JSON mode
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.json {
            eprintln!("{} {}", "Warning:".yellow().bold(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print a section heading
    pub fn heading(&self, title: &str) {
        if !self.json {
            println!("{}", title.bold().underline());
        }
    }

    /// Print preformatted multi-line text
    pub fn block(&self, text: &str) {
        if !self.json {
            print!("{text}");
        }
    }

    /// Spinner shown while a request is in flight; hidden in JSON mode
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}
