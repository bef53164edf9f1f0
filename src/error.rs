//! Error types for ticket-desk
//!
//! Every fallible operation in the crate returns [`Result`]. Views convert
//! these errors into one of three behaviors (advisory, write, read failure)
//! so nothing propagates across component boundaries.

use thiserror::Error;

/// Main error type for ticket-desk operations
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// Input rejected before any request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid value supplied for an enumerated field
    #[error("Invalid {field}: '{value}'. Must be one of: {expected}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The backend answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Interactive prompt failure
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ticket creation failed
    #[error("Error submitting ticket: {0}")]
    SubmitFailed(Box<TicketDeskError>),

    /// Status update failed
    #[error("Error updating ticket: {0}")]
    UpdateFailed(Box<TicketDeskError>),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

impl TicketDeskError {
    /// Create a custom error
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Wrap an error raised while creating a ticket
    pub fn submit_failed(source: Self) -> Self {
        Self::SubmitFailed(Box::new(source))
    }

    /// Wrap an error raised while updating a ticket
    pub fn update_failed(source: Self) -> Self {
        Self::UpdateFailed(Box::new(source))
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::SubmitFailed(_) => "Error submitting ticket".to_string(),
            Self::UpdateFailed(_) => "Error updating ticket".to_string(),
            Self::Http(e) if e.is_timeout() => "The server did not respond in time".to_string(),
            Self::Http(e) if e.is_connect() => "Could not connect to the ticket server".to_string(),
            _ => self.to_string(),
        }
    }

    /// Hints for resolving the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SubmitFailed(inner) | Self::UpdateFailed(inner) => {
                let mut hints = vec!["Run the command again to retry".to_string()];
                hints.extend(inner.suggestions());
                hints
            },
            Self::Http(e) if e.is_connect() || e.is_timeout() => vec![
                "Check that the backend is running".to_string(),
                "Set the server address with --base-url or TICKET_DESK__API__BASE_URL".to_string(),
            ],
            Self::Config(_) => vec!["Run 'ticket-desk config show' to inspect the effective configuration".to_string()],
            Self::Validation(_) => vec!["Title and description are required; titles are limited to 200 characters".to_string()],
            Self::InvalidChoice { expected, .. } => vec![format!("Valid values: {expected}")],
            _ => vec![],
        }
    }

    /// Whether retrying the same action may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::SubmitFailed(inner) | Self::UpdateFailed(inner) => inner.is_recoverable(),
            _ => false,
        }
    }

    /// Whether the error stems from configuration
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether the error is a failed create or update
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::SubmitFailed(_) | Self::UpdateFailed(_))
    }
}

/// Result type alias for ticket-desk operations
pub type Result<T> = std::result::Result<T, TicketDeskError>;
