//! Handler for the `create` command
//!
//! Asks the classifier for suggestions unless the user picked both category
//! and priority, then submits the ticket. Values given on the command line
//! always win over suggestions.

use super::common::classify_with_spinner;
use crate::api::TicketApi;
use crate::cli::output::OutputFormatter;
use crate::core::{Category, Priority};
use crate::error::Result;
use crate::views::{ClassifyOutcome, SubmissionForm};

/// Parameters for creating a ticket
pub struct CreateParams {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub no_classify: bool,
}

/// Handle the create command
pub async fn handle_create_command<A>(
    params: CreateParams,
    api: &A,
    output: &OutputFormatter,
) -> Result<()>
where
    A: TicketApi + ?Sized,
{
    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;
    let priority = params
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;

    let mut form = SubmissionForm::new();
    form.set_title(params.title);
    form.set_description(params.description);

    if !params.no_classify && (category.is_none() || priority.is_none()) {
        if let ClassifyOutcome::Applied(suggestion) =
            classify_with_spinner(&mut form, api, output).await
        {
            tracing::info!(?suggestion, "Using classifier suggestion");
        }
    }

    if let Some(category) = category {
        form.set_category(category);
    }
    if let Some(priority) = priority {
        form.set_priority(priority);
    }

    let ticket = form.submit(api, |_| {}).await?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("Created ticket #{} '{}'", ticket.id, ticket.title));
        output.info(&format!(
            "Category: {} | Priority: {} | Status: {}",
            ticket.category,
            ticket.priority,
            ticket.status.label()
        ));
    }

    Ok(())
}
