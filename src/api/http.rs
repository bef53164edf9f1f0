//! REST client for the ticket backend

use super::{ListResponse, TicketApi, TicketPage};
use crate::config::ApiConfig;
use crate::core::{
    ClassificationSuggestion, FilterState, NewTicket, StatsSnapshot, Status, StatusUpdate, Ticket,
    TicketId,
};
use crate::error::{Result, TicketDeskError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Ticket API over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpTicketApi {
    base_url: String,
    client: Client,
}

impl HttpTicketApi {
    /// Create a client for the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ticket-desk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/tickets/{}", self.base_url, path)
    }

    /// Send a request and decode a successful JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(%status, "Request failed");
            return Err(TicketDeskError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TicketDeskError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TicketApi for HttpTicketApi {
    async fn list_tickets(&self, filters: &FilterState) -> Result<TicketPage> {
        let url = self.url("");
        let query = filters.to_query();
        debug!("GET {} {:?}", url, query);

        let response: ListResponse = self.send(self.client.get(&url).query(&query)).await?;
        Ok(response.into())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        let url = self.url("");
        debug!("POST {}", url);
        self.send(self.client.post(&url).json(ticket)).await
    }

    async fn update_status(&self, id: &TicketId, status: Status) -> Result<Ticket> {
        let url = self.url(&format!("{id}/"));
        debug!("PATCH {} status={}", url, status);
        self.send(self.client.patch(&url).json(&StatusUpdate { status }))
            .await
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        let url = self.url("stats/");
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }

    async fn classify(&self, description: &str) -> Result<ClassificationSuggestion> {
        let url = self.url("classify/");
        debug!("POST {}", url);
        self.send(
            self.client
                .post(&url)
                .json(&serde_json::json!({ "description": description })),
        )
        .await
    }
}
