//! Command handlers for the ticket-desk CLI
//!
//! Each submodule implements one command (or a closely related pair) on top
//! of the views in [`crate::views`]. Handlers take the API by reference so
//! they can be exercised with a mock backend.

pub mod common;
pub mod config;
pub mod create;
pub mod interactive;
pub mod list;
pub mod stats;

pub use common::{HandlerContext, classify_with_spinner, print_collection};
pub use config::handle_config_command;
pub use create::{CreateParams, handle_create_command};
pub use interactive::handle_interactive_command;
pub use list::{ListParams, handle_list_command, handle_status_command};
pub use stats::{handle_classify_command, handle_stats_command};
