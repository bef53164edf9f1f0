use crate::error::TicketDeskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum title length, counted in UTF-16 code units
pub const TITLE_MAX_LEN: usize = 200;

/// Server-assigned ticket identifier
///
/// The backend may send the id as a JSON number or string; both are kept
/// as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Wrap a raw identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Billing,
    Technical,
    Account,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Billing, Self::Technical, Self::Account, Self::General];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Technical => "technical",
            Self::Account => "account",
            Self::General => "general",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Account => "Account",
            Self::General => "General",
        }
    }
}

/// Ticket priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Ticket lifecycle status
///
/// Any status may move to any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

macro_rules! impl_choice {
    ($ty:ty, $field:literal, $expected:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = TicketDeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase().replace(['-', ' '], "_");
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| TicketDeskError::InvalidChoice {
                        field: $field,
                        value: s.to_string(),
                        expected: $expected,
                    })
            }
        }
    };
}

impl_choice!(Category, "category", "billing, technical, account, general");
impl_choice!(Priority, "priority", "low, medium, high, critical");
impl_choice!(Status, "status", "open, in_progress, resolved");

/// A support ticket as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl NewTicket {
    /// Check the required-field and length constraints
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.title.trim().is_empty() {
            return Err(TicketDeskError::Validation("title is required".to_string()));
        }
        if self.title.encode_utf16().count() > TITLE_MAX_LEN {
            return Err(TicketDeskError::Validation(format!(
                "title cannot exceed {TITLE_MAX_LEN} characters"
            )));
        }
        if self.description.trim().is_empty() {
            return Err(TicketDeskError::Validation(
                "description is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payload for a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: Status,
}

/// Category/priority suggested by the classification endpoint
///
/// Either field may be missing when the classifier abstains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSuggestion {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub suggested_category: Option<Category>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub suggested_priority: Option<Priority>,
}

impl ClassificationSuggestion {
    /// True when neither field carries a suggestion
    pub const fn is_empty(&self) -> bool {
        self.suggested_category.is_none() && self.suggested_priority.is_none()
    }
}

/// Treat null, empty and unrecognized strings as an abstention
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_accepts_number_and_string() {
        let id: TicketId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
        let id: TicketId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(id.to_string(), "abc-1");
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" billing ".parse::<Category>().unwrap(), Category::Billing);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Category::default(), Category::General);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Status::default(), Status::Open);
    }

    #[test]
    fn test_ticket_decodes_backend_shape() {
        let json = r#"{
            "id": 7,
            "title": "Refund",
            "description": "Charged twice",
            "category": "billing",
            "priority": "high",
            "status": "in_progress",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, TicketId::from(7));
        assert_eq!(ticket.category, Category::Billing);
        assert_eq!(ticket.status, Status::InProgress);
    }

    #[test]
    fn test_new_ticket_validation() {
        let mut ticket = NewTicket {
            title: "Login broken".to_string(),
            description: "Cannot sign in".to_string(),
            category: Category::Account,
            priority: Priority::High,
        };
        assert!(ticket.validate().is_ok());

        ticket.title = "a".repeat(200);
        assert!(ticket.validate().is_ok());
        ticket.title = "a".repeat(201);
        assert!(ticket.validate().is_err());

        ticket.title = "   ".to_string();
        assert!(ticket.validate().is_err());

        ticket.title = "ok".to_string();
        ticket.description = String::new();
        assert!(ticket.validate().is_err());
    }

    #[test]
    fn test_title_limit_counts_utf16_units() {
        // Each emoji is two UTF-16 code units
        let ticket = NewTicket {
            title: "😀".repeat(101),
            description: "d".to_string(),
            category: Category::General,
            priority: Priority::Medium,
        };
        assert!(ticket.validate().is_err());
    }

    #[test]
    fn test_suggestion_blank_fields_are_abstentions() {
        let s: ClassificationSuggestion =
            serde_json::from_str(r#"{"suggested_category": "", "suggested_priority": "high"}"#)
                .unwrap();
        assert_eq!(s.suggested_category, None);
        assert_eq!(s.suggested_priority, Some(Priority::High));

        let s: ClassificationSuggestion = serde_json::from_str("{}").unwrap();
        assert!(s.is_empty());

        let s: ClassificationSuggestion =
            serde_json::from_str(r#"{"suggested_category": null}"#).unwrap();
        assert!(s.is_empty());
    }
}
