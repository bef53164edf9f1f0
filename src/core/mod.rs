//! Core data model
//!
//! Tickets and their enumerated fields, request payloads, the stats snapshot
//! and the list filter state.

mod builders;
mod filter;
mod stats;
mod ticket;

pub use builders::TicketBuilder;
pub use filter::{FilterState, parse_filter};
pub use stats::{StatsSnapshot, round_2dp};
pub use ticket::{
    Category, ClassificationSuggestion, NewTicket, Priority, Status, StatusUpdate, TITLE_MAX_LEN,
    Ticket, TicketId,
};
