//! ticket-desk - Support ticket tracker client
//!
//! This is the main entry point for the ticket-desk CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use clap::Parser;
use std::process;
use ticket_desk::cli::handlers::{
    CreateParams, HandlerContext, ListParams, handle_classify_command, handle_config_command,
    handle_create_command, handle_interactive_command, handle_list_command,
    handle_stats_command, handle_status_command,
};
use ticket_desk::cli::{Cli, Commands, OutputFormatter};
use ticket_desk::error::{Result, TicketDeskError};
use tracing_subscriber::EnvFilter;

/// Main entry point for the ticket-desk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs during command execution
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    init_logging(cli.verbose, cli.no_color);

    let ctx = HandlerContext::new(cli.config.as_deref(), cli.base_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch_command(cli.command, ctx, formatter))
}

/// Install a stderr logger only under `--verbose` or an explicit `RUST_LOG`
///
/// Advisory and read failures are logged, never shown, in normal use.
fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

async fn dispatch_command(
    command: Commands,
    ctx: HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Create {
            title,
            description,
            category,
            priority,
            no_classify,
        } => {
            let params = CreateParams {
                title,
                description,
                category,
                priority,
                no_classify,
            };
            handle_create_command(params, &ctx.api, formatter).await
        },
        Commands::List {
            status,
            category,
            priority,
            search,
            page,
        } => {
            let params = ListParams {
                status,
                category,
                priority,
                search,
                page,
            };
            handle_list_command(params, &ctx.api, ctx.page_size(), formatter).await
        },
        Commands::Status { id, status } => {
            handle_status_command(&id, &status, &ctx.api, ctx.page_size(), formatter).await
        },
        Commands::Stats => handle_stats_command(&ctx.api, formatter).await,
        Commands::Classify { description } => {
            handle_classify_command(description, &ctx.api, formatter).await
        },
        Commands::Interactive => handle_interactive_command(ctx, formatter).await,
        Commands::Config { command } => handle_config_command(command, &ctx.config, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Prints the main message, any suggestions, and in JSON mode a structured
/// error object. The full error is dumped when debug logging is enabled.
fn handle_error(error: &TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let _cli = Cli::parse_from(["ticket-desk", "stats"]);
        let _cli = Cli::parse_from(["ticket-desk", "list", "--status", "all"]);
        let _cli = Cli::parse_from(["ticket-desk", "status", "42", "resolved"]);
        let _cli = Cli::parse_from(["ticket-desk", "--json", "config", "show"]);
    }
}
