//! ticket-desk - A client for a support-ticket tracking service
//!
//! This crate provides the client side of a small help desk:
//! - Ticket submission with advisory category/priority classification
//! - A filtered, paginated ticket list with inline status changes
//! - Aggregate statistics that refresh after every successful submission
//!
//! The backend is reached over HTTP through the [`api::TicketApi`] trait.
//! Views in [`views`] hold the presentation state and decide when to fetch;
//! the [`cli`] and [`interactive`] front ends render them.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::single_match_else)]
#![allow(clippy::indexing_slicing)]

//! # Example
//!
//! ```rust,ignore
//! use ticket_desk::api::HttpTicketApi;
//! use ticket_desk::config::Config;
//! use ticket_desk::views::RootView;
//!
//! let config = Config::load(None)?;
//! let api = HttpTicketApi::new(&config.api)?;
//! let mut root = RootView::new(api, config.ui.page_size);
//!
//! // Fetch the first page and the stats panel
//! root.sync().await;
//! println!("{}", root.stats().render());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod events;
pub mod interactive;
pub mod views;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
