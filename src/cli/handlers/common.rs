use crate::api::{HttpTicketApi, TicketApi};
use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::error::Result;
use crate::views::{ClassifyOutcome, CollectionView, SubmissionForm};
use std::path::Path;

/// Common context for all handler operations
pub struct HandlerContext {
    pub config: Config,
    pub api: HttpTicketApi,
}

impl HandlerContext {
    /// Load configuration and build the API client
    pub fn new(config_path: Option<&Path>, base_url: Option<String>) -> Result<Self> {
        let config = Config::load(config_path)?.with_base_url(base_url);
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let api = HttpTicketApi::new(&config.api)?;
        Ok(Self { config, api })
    }

    pub const fn page_size(&self) -> usize {
        self.config.ui.page_size
    }
}

/// Run the form's classification with a spinner as the busy indicator
pub async fn classify_with_spinner<A>(
    form: &mut SubmissionForm,
    api: &A,
    output: &OutputFormatter,
) -> ClassifyOutcome
where
    A: TicketApi + ?Sized,
{
    let Some(description) = form.begin_classification() else {
        return ClassifyOutcome::Skipped;
    };
    let spinner = output.spinner("Loading suggestions...");
    let result = api.classify(&description).await;
    spinner.finish_and_clear();
    form.finish_classification(result)
}

/// Print the current page of a collection view
pub fn print_collection(view: &CollectionView, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "filters": view.filters(),
            "page": view.page(),
            "total": view.total(),
            "has_previous": view.has_previous(),
            "has_next": view.has_next(),
            "tickets": view.tickets(),
        }));
    }

    output.heading(&format!("Tickets ({} total)", view.total()));
    output.block(&view.render());
    Ok(())
}
