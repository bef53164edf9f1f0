//! Handlers for the `stats` and `classify` commands

use super::common::classify_with_spinner;
use crate::api::TicketApi;
use crate::cli::output::OutputFormatter;
use crate::core::ClassificationSuggestion;
use crate::error::Result;
use crate::views::{ClassifyOutcome, StatsView, SubmissionForm};

/// Handle the stats command
///
/// A failed fetch is logged and the zeroed defaults are shown.
pub async fn handle_stats_command<A>(api: &A, output: &OutputFormatter) -> Result<()>
where
    A: TicketApi + ?Sized,
{
    let mut view = StatsView::new();
    view.refresh_if_needed(api).await;

    if output.is_json() {
        return output.print_json(view.snapshot());
    }

    output.heading("Support Ticket Statistics");
    output.block(&view.render());
    Ok(())
}

/// Handle the classify command
///
/// Classification is advisory; a failure prints no suggestion and still
/// succeeds.
pub async fn handle_classify_command<A>(
    description: String,
    api: &A,
    output: &OutputFormatter,
) -> Result<()>
where
    A: TicketApi + ?Sized,
{
    let mut form = SubmissionForm::new();
    form.set_description(description);

    let suggestion = match classify_with_spinner(&mut form, api, output).await {
        ClassifyOutcome::Applied(suggestion) => suggestion,
        _ => ClassificationSuggestion::default(),
    };

    if output.is_json() {
        return output.print_json(&suggestion);
    }

    if suggestion.is_empty() {
        output.info("No suggestion available");
        return Ok(());
    }
    if let Some(category) = suggestion.suggested_category {
        output.info(&format!("Suggested category: {}", category.label()));
    }
    if let Some(priority) = suggestion.suggested_priority {
        output.info(&format!("Suggested priority: {}", priority.label()));
    }
    Ok(())
}
