//! Command-line interface
//!
//! Argument definitions live here; each subcommand is implemented in
//! [`handlers`].

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Support ticket tracker client
#[derive(Parser, Debug)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Configuration file to load instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new ticket
    Create {
        /// Short summary (at most 200 characters)
        #[arg(short, long)]
        title: String,

        /// Full description of the problem
        #[arg(short, long)]
        description: String,

        /// billing, technical, account or general
        #[arg(short, long)]
        category: Option<String>,

        /// low, medium, high or critical
        #[arg(short, long)]
        priority: Option<String>,

        /// Do not ask the classifier for category/priority suggestions
        #[arg(long)]
        no_classify: bool,
    },

    /// List tickets
    List {
        /// open, in_progress, resolved or all
        #[arg(long)]
        status: Option<String>,

        /// billing, technical, account, general or all
        #[arg(long)]
        category: Option<String>,

        /// low, medium, high, critical or all
        #[arg(long)]
        priority: Option<String>,

        /// Match title or description
        #[arg(long)]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Change the status of a ticket
    Status {
        /// Ticket ID
        id: String,

        /// open, in_progress or resolved
        status: String,
    },

    /// Show ticket statistics
    Stats,

    /// Suggest a category and priority for a description
    Classify {
        /// Text to classify
        description: String,
    },

    /// Browse, triage and submit tickets interactively
    Interactive,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the default configuration file path
    Path,
}
