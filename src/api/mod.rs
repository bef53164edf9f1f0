//! Ticket backend API
//!
//! [`TicketApi`] is the seam between the views and the network. The HTTP
//! implementation lives in [`http`]; tests substitute a mock.

pub mod http;

use crate::core::{
    ClassificationSuggestion, FilterState, NewTicket, StatsSnapshot, Status, Ticket, TicketId,
};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use http::HttpTicketApi;

/// Operations offered by the ticket backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Fetch one page of tickets matching the filters
    async fn list_tickets(&self, filters: &FilterState) -> Result<TicketPage>;

    /// Create a ticket
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket>;

    /// Change the status of a ticket
    async fn update_status(&self, id: &TicketId, status: Status) -> Result<Ticket>;

    /// Fetch aggregate statistics
    async fn stats(&self) -> Result<StatsSnapshot>;

    /// Ask the classifier for a category/priority suggestion
    async fn classify(&self, description: &str) -> Result<ClassificationSuggestion>;
}

/// A page of tickets with the total known to the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub total: u64,
}

/// The two shapes the list endpoint may answer with
///
/// An object carrying `results` is the paginated envelope; anything else
/// must be a bare array. Picking the shape up front keeps the field-level
/// decode error of a bad ticket.
#[derive(Debug)]
pub enum ListResponse {
    Paginated { results: Vec<Ticket>, count: u64 },
    Bare(Vec<Ticket>),
}

#[derive(Deserialize)]
struct Envelope {
    results: Vec<Ticket>,
    count: Option<u64>,
}

impl<'de> Deserialize<'de> for ListResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let response = if value.get("results").is_some() {
            serde_json::from_value::<Envelope>(value).map(|envelope| Self::Paginated {
                count: envelope
                    .count
                    .unwrap_or(envelope.results.len() as u64),
                results: envelope.results,
            })
        } else {
            serde_json::from_value(value).map(Self::Bare)
        };
        response.map_err(serde::de::Error::custom)
    }
}

impl From<ListResponse> for TicketPage {
    fn from(response: ListResponse) -> Self {
        match response {
            ListResponse::Paginated { results, count } => Self {
                tickets: results,
                total: count,
            },
            ListResponse::Bare(tickets) => Self {
                total: tickets.len() as u64,
                tickets,
            },
        }
    }
}
