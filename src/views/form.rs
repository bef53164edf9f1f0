//! Ticket submission form
//!
//! Holds the draft for a new ticket, applies advisory classification and
//! submits the draft. Classification never blocks editing: callers that
//! want to keep the form responsive use [`SubmissionForm::begin_classification`]
//! and [`SubmissionForm::finish_classification`] around their own await.

use crate::api::TicketApi;
use crate::core::{Category, ClassificationSuggestion, NewTicket, Priority, Ticket};
use crate::error::{Result, TicketDeskError};
use tracing::{debug, warn};

/// Editable fields of a ticket that has not been submitted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl TicketDraft {
    fn to_new_ticket(&self) -> NewTicket {
        NewTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            priority: self.priority,
        }
    }
}

/// Result of an advisory classification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    /// Description was empty, nothing was sent
    Skipped,
    /// At least one suggestion was applied to the draft
    Applied(ClassificationSuggestion),
    /// The classifier answered without a usable suggestion
    Abstained,
    /// The call failed; the draft is unchanged
    Failed(String),
}

/// State of the new-ticket form
#[derive(Debug, Default)]
pub struct SubmissionForm {
    draft: TicketDraft,
    classifying: bool,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Busy indicator while a classification request is in flight
    pub const fn is_classifying(&self) -> bool {
        self.classifying
    }

    /// Start classification after the description was edited
    ///
    /// Returns the text to classify, or `None` when the description is empty.
    pub fn begin_classification(&mut self) -> Option<String> {
        if self.draft.description.is_empty() {
            return None;
        }
        self.classifying = true;
        Some(self.draft.description.clone())
    }

    /// Apply the classifier's answer
    ///
    /// Only the fields the classifier actually suggested are overwritten.
    /// Failures are logged and otherwise ignored.
    pub fn finish_classification(
        &mut self,
        result: Result<ClassificationSuggestion>,
    ) -> ClassifyOutcome {
        self.classifying = false;
        match result {
            Ok(suggestion) if suggestion.is_empty() => {
                debug!("Classifier returned no suggestion");
                ClassifyOutcome::Abstained
            },
            Ok(suggestion) => {
                if let Some(category) = suggestion.suggested_category {
                    self.draft.category = category;
                }
                if let Some(priority) = suggestion.suggested_priority {
                    self.draft.priority = priority;
                }
                debug!(?suggestion, "Applied classification");
                ClassifyOutcome::Applied(suggestion)
            },
            Err(e) => {
                warn!("Classification failed: {e}");
                ClassifyOutcome::Failed(e.to_string())
            },
        }
    }

    /// Classify the current description and apply the suggestion
    pub async fn classify_description<A>(&mut self, api: &A) -> ClassifyOutcome
    where
        A: TicketApi + ?Sized,
    {
        let Some(description) = self.begin_classification() else {
            return ClassifyOutcome::Skipped;
        };
        let result = api.classify(&description).await;
        self.finish_classification(result)
    }

    /// Submit the draft
    ///
    /// Validation errors are returned without contacting the backend. On
    /// success the draft is reset and `on_submitted` runs; on failure the
    /// draft is kept so the user can retry.
    pub async fn submit<A, F>(&mut self, api: &A, on_submitted: F) -> Result<Ticket>
    where
        A: TicketApi + ?Sized,
        F: FnOnce(&Ticket),
    {
        let payload = self.draft.to_new_ticket();
        payload.validate()?;

        match api.create_ticket(&payload).await {
            Ok(ticket) => {
                debug!(id = %ticket.id, "Ticket created");
                self.draft = TicketDraft::default();
                on_submitted(&ticket);
                Ok(ticket)
            },
            Err(e) => {
                warn!("Ticket submission failed: {e}");
                Err(TicketDeskError::submit_failed(e))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTicketApi;
    use crate::core::{Status, TicketBuilder};

    fn filled_form() -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.set_title("Cannot log in");
        form.set_description("Password reset link expired");
        form.set_category(Category::Account);
        form.set_priority(Priority::High);
        form
    }

    #[tokio::test]
    async fn test_successful_submit_resets_draft_and_notifies() {
        let mut api = MockTicketApi::new();
        api.expect_create_ticket()
            .withf(|t: &NewTicket| {
                t.title == "Cannot log in"
                    && t.category == Category::Account
                    && t.priority == Priority::High
            })
            .times(1)
            .returning(|t| {
                Ok(TicketBuilder::new()
                    .id(1)
                    .title(t.title.clone())
                    .description(t.description.clone())
                    .status(Status::Open)
                    .build())
            });

        let mut form = filled_form();
        let mut notified = 0;
        let ticket = form.submit(&api, |_| notified += 1).await.unwrap();

        assert_eq!(ticket.id.as_str(), "1");
        assert_eq!(notified, 1);
        assert_eq!(form.draft(), &TicketDraft::default());
        assert_eq!(form.draft().category, Category::General);
        assert_eq!(form.draft().priority, Priority::Medium);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let mut api = MockTicketApi::new();
        api.expect_create_ticket()
            .times(1)
            .returning(|_| Err(TicketDeskError::custom("connection reset")));

        let mut form = filled_form();
        let before = form.draft().clone();
        let mut notified = false;
        let err = form.submit(&api, |_| notified = true).await.unwrap_err();

        assert!(err.is_write_failure());
        assert!(!notified);
        assert_eq!(form.draft(), &before);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_sent() {
        let mut api = MockTicketApi::new();
        api.expect_create_ticket().never();

        let mut form = SubmissionForm::new();
        form.set_description("no title");
        let err = form.submit(&api, |_| {}).await.unwrap_err();
        assert!(matches!(err, TicketDeskError::Validation(_)));

        form.set_title("x".repeat(201));
        assert!(form.submit(&api, |_| {}).await.is_err());
    }

    #[tokio::test]
    async fn test_partial_suggestion_only_updates_present_fields() {
        let mut api = MockTicketApi::new();
        api.expect_classify()
            .withf(|d: &str| d == "Password reset link expired")
            .returning(|_| {
                Ok(ClassificationSuggestion {
                    suggested_category: None,
                    suggested_priority: Some(Priority::Critical),
                })
            });

        let mut form = filled_form();
        let outcome = form.classify_description(&api).await;

        assert!(matches!(outcome, ClassifyOutcome::Applied(_)));
        assert_eq!(form.draft().category, Category::Account);
        assert_eq!(form.draft().priority, Priority::Critical);
        assert!(!form.is_classifying());
    }

    #[tokio::test]
    async fn test_empty_suggestion_changes_nothing() {
        let mut api = MockTicketApi::new();
        api.expect_classify()
            .returning(|_| Ok(ClassificationSuggestion::default()));

        let mut form = filled_form();
        let before = form.draft().clone();
        assert_eq!(form.classify_description(&api).await, ClassifyOutcome::Abstained);
        assert_eq!(form.draft(), &before);
    }

    #[tokio::test]
    async fn test_failed_classification_is_reported_but_silent() {
        let mut api = MockTicketApi::new();
        api.expect_classify().returning(|_| {
            Err(TicketDeskError::Api {
                status: 503,
                body: "{}".to_string(),
            })
        });

        let mut form = filled_form();
        let before = form.draft().clone();
        let outcome = form.classify_description(&api).await;

        assert!(matches!(outcome, ClassifyOutcome::Failed(_)));
        assert_eq!(form.draft(), &before);
        assert!(!form.is_classifying());
    }

    #[tokio::test]
    async fn test_empty_description_skips_classifier() {
        let mut api = MockTicketApi::new();
        api.expect_classify().never();

        let mut form = SubmissionForm::new();
        assert_eq!(form.classify_description(&api).await, ClassifyOutcome::Skipped);
    }

    #[test]
    fn test_form_stays_editable_while_classifying() {
        let mut form = filled_form();
        let text = form.begin_classification();
        assert_eq!(text.as_deref(), Some("Password reset link expired"));
        assert!(form.is_classifying());

        form.set_title("Edited while waiting");
        form.finish_classification(Ok(ClassificationSuggestion {
            suggested_category: Some(Category::Technical),
            suggested_priority: None,
        }));

        assert!(!form.is_classifying());
        assert_eq!(form.draft().title, "Edited while waiting");
        assert_eq!(form.draft().category, Category::Technical);
    }
}
