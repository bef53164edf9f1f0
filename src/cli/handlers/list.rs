//! Handlers for the `list` and `status` commands

use super::common::print_collection;
use crate::api::TicketApi;
use crate::cli::output::OutputFormatter;
use crate::core::{Status, TicketId, parse_filter};
use crate::error::Result;
use crate::views::CollectionView;

/// Filter arguments for the list command; "all" or nothing means no filter
#[derive(Debug, Default)]
pub struct ListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
    pub page: u32,
}

/// Build a collection view from list arguments
pub fn collection_from_params(params: ListParams, page_size: usize) -> Result<CollectionView> {
    let mut view = CollectionView::new(page_size);
    view.set_status_filter(parse_filter(params.status.as_deref())?);
    view.set_category_filter(parse_filter(params.category.as_deref())?);
    view.set_priority_filter(parse_filter(params.priority.as_deref())?);
    view.set_search(params.search);
    view.set_page(params.page);
    Ok(view)
}

/// Handle the list command
///
/// A failed fetch is logged and shows the empty list; it is not an error.
pub async fn handle_list_command<A>(
    params: ListParams,
    api: &A,
    page_size: usize,
    output: &OutputFormatter,
) -> Result<()>
where
    A: TicketApi + ?Sized,
{
    let mut view = collection_from_params(params, page_size)?;
    view.refresh_if_needed(api).await;
    print_collection(&view, output)
}

/// Handle the status command
///
/// Updates the ticket, then shows the first page as the backend now reports it.
pub async fn handle_status_command<A>(
    id: &str,
    status: &str,
    api: &A,
    page_size: usize,
    output: &OutputFormatter,
) -> Result<()>
where
    A: TicketApi + ?Sized,
{
    let status: Status = status.parse()?;
    let id = TicketId::new(id.trim());

    let mut view = CollectionView::new(page_size);
    view.change_status(api, &id, status).await?;

    output.success(&format!("Ticket #{id} is now {}", status.label()));
    print_collection(&view, output)
}
