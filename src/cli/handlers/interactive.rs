//! Handler for the `interactive` command

use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::{Result, TicketDeskError};
use crate::interactive::InteractiveSession;
use crate::views::RootView;

/// Start an interactive session against the configured backend
pub async fn handle_interactive_command(
    ctx: HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    if output.is_json() {
        return Err(TicketDeskError::custom(
            "Interactive mode cannot be combined with --json",
        ));
    }

    let page_size = ctx.page_size();
    let root = RootView::new(ctx.api, page_size);
    InteractiveSession::new(root, output).run().await
}
