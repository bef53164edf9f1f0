//! Filtered, paginated ticket list
//!
//! Filter changes, page changes and the refresh signal all mark the view
//! dirty; one fetch satisfies all of them. Each fetch carries a sequence
//! number and only the response to the most recently issued fetch is
//! applied, so a slow stale response cannot overwrite a newer one.

use super::RequestSequencer;
use crate::api::{TicketApi, TicketPage};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::core::{Category, FilterState, Priority, Status, Ticket, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::events::RefreshListener;
use std::fmt::Write as _;
use tracing::{debug, warn};

/// An issued list fetch awaiting its response
#[derive(Debug, Clone)]
pub struct FetchRequest {
    seq: u64,
    filters: FilterState,
}

impl FetchRequest {
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    /// Filters captured when the fetch was issued
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }
}

/// State of the ticket list
#[derive(Debug)]
pub struct CollectionView {
    filters: FilterState,
    tickets: Vec<Ticket>,
    total: u64,
    page_size: usize,
    sequencer: RequestSequencer,
    dirty: bool,
    refresh: Option<RefreshListener>,
}

impl Default for CollectionView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CollectionView {
    /// Create an empty view; the first [`Self::refresh_if_needed`] fetches
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterState::new(),
            tickets: Vec::new(),
            total: 0,
            page_size: page_size.max(1),
            sequencer: RequestSequencer::default(),
            dirty: true,
            refresh: None,
        }
    }

    /// Re-fetch whenever `listener` reports a change
    #[must_use]
    pub fn with_refresh(mut self, listener: RefreshListener) -> Self {
        self.refresh = Some(listener);
        self
    }

    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn page(&self) -> u32 {
        self.filters.page()
    }

    /// Status of a ticket as last reported by the backend
    pub fn displayed_status(&self, id: &TicketId) -> Option<Status> {
        self.tickets.iter().find(|t| &t.id == id).map(|t| t.status)
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) {
        self.filters.set_status(status);
        self.dirty = true;
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.filters.set_category(category);
        self.dirty = true;
    }

    pub fn set_priority_filter(&mut self, priority: Option<Priority>) {
        self.filters.set_priority(priority);
        self.dirty = true;
    }

    pub fn set_search(&mut self, search: Option<String>) {
        self.filters.set_search(search);
        self.dirty = true;
    }

    /// Jump to a page directly
    pub fn set_page(&mut self, page: u32) {
        self.filters.set_page(page);
        self.dirty = true;
    }

    /// "Previous" is disabled on the first page
    pub const fn has_previous(&self) -> bool {
        self.filters.page() > 1
    }

    /// "Next" is disabled when the last page fetched came back short
    ///
    /// This is a heuristic: the backend's real page size is not known.
    pub fn has_next(&self) -> bool {
        self.tickets.len() >= self.page_size
    }

    /// Move to the previous page if there is one
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.set_page(self.filters.page() - 1);
        true
    }

    /// Move to the next page if the current one looks full
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.set_page(self.filters.page() + 1);
        true
    }

    /// Force a re-fetch on the next sync
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether a trigger has fired since the last fetch was issued
    pub fn needs_fetch(&mut self) -> bool {
        let refreshed = self.refresh.as_mut().is_some_and(RefreshListener::take_change);
        self.dirty |= refreshed;
        self.dirty
    }

    /// Issue a fetch for the current filters
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.dirty = false;
        FetchRequest {
            seq: self.sequencer.issue(),
            filters: self.filters.clone(),
        }
    }

    /// Apply a fetch result if it answers the latest issued request
    ///
    /// Returns true when the ticket list was replaced.
    pub fn complete_fetch(&mut self, request: FetchRequest, result: Result<TicketPage>) -> bool {
        if !self.sequencer.is_latest(request.seq) {
            debug!(
                seq = request.seq,
                latest = self.sequencer.latest(),
                "Discarding stale ticket list response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                debug!(count = page.tickets.len(), total = page.total, "Ticket list updated");
                self.tickets = page.tickets;
                self.total = page.total;
                true
            },
            Err(e) => {
                warn!("Error fetching tickets: {e}");
                false
            },
        }
    }

    /// Fetch the list for the current filters
    pub async fn fetch<A>(&mut self, api: &A) -> bool
    where
        A: TicketApi + ?Sized,
    {
        let request = self.begin_fetch();
        let result = api.list_tickets(request.filters()).await;
        self.complete_fetch(request, result)
    }

    /// Fetch only if a trigger fired
    pub async fn refresh_if_needed<A>(&mut self, api: &A) -> bool
    where
        A: TicketApi + ?Sized,
    {
        if !self.needs_fetch() {
            return false;
        }
        self.fetch(api).await
    }

    /// Change a ticket's status on the backend, then re-fetch
    ///
    /// The local list is never edited directly, so after a failure the view
    /// still shows the status the backend last reported.
    pub async fn change_status<A>(&mut self, api: &A, id: &TicketId, status: Status) -> Result<()>
    where
        A: TicketApi + ?Sized,
    {
        match api.update_status(id, status).await {
            Ok(_) => {
                debug!(%id, %status, "Ticket status updated");
                self.fetch(api).await;
                Ok(())
            },
            Err(e) => {
                warn!("Error updating ticket {id}: {e}");
                Err(TicketDeskError::update_failed(e))
            },
        }
    }

    /// Plain-text rendering of the current page
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.tickets.is_empty() {
            out.push_str("No tickets found\n");
        }
        for ticket in &self.tickets {
            let _ = writeln!(out, "#{} {}", ticket.id, ticket.title);
            let _ = writeln!(out, "  {}", ticket.description);
            let _ = writeln!(
                out,
                "  Category: {} | Priority: {} | Status: {}",
                ticket.category,
                ticket.priority,
                ticket.status.label()
            );
            let _ = writeln!(out, "  Created: {}", ticket.created_at.format("%Y-%m-%d"));
        }
        let _ = writeln!(
            out,
            "[{}] Page {} [{}]",
            if self.has_previous() { "Previous" } else { "-" },
            self.page(),
            if self.has_next() { "Next" } else { "-" }
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTicketApi;
    use crate::events::RefreshSignal;
    use crate::test_utils::{create_test_ticket, page_of};
    use mockall::Sequence;

    #[tokio::test]
    async fn test_query_omits_all_filters() {
        let mut api = MockTicketApi::new();
        api.expect_list_tickets()
            .withf(|f: &FilterState| {
                f.to_query() == vec![("status", "open".to_string()), ("page", "1".to_string())]
            })
            .times(1)
            .returning(|_| Ok(page_of(3)));

        let mut view = CollectionView::default();
        view.set_status_filter(Some(Status::Open));
        assert!(view.refresh_if_needed(&api).await);
        assert_eq!(view.tickets().len(), 3);
        assert_eq!(view.total(), 3);
    }

    #[tokio::test]
    async fn test_filter_change_fetches_first_page() {
        let mut api = MockTicketApi::new();
        let mut seq = Sequence::new();
        api.expect_list_tickets()
            .withf(|f: &FilterState| f.page() == 3)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page_of(10)));
        api.expect_list_tickets()
            .withf(|f: &FilterState| f.page() == 1 && f.status() == Some(Status::Resolved))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page_of(2)));

        let mut view = CollectionView::default();
        view.set_page(3);
        view.refresh_if_needed(&api).await;
        view.set_status_filter(Some(Status::Resolved));
        view.refresh_if_needed(&api).await;
        assert_eq!(view.page(), 1);
    }

    #[tokio::test]
    async fn test_no_fetch_without_trigger() {
        let mut api = MockTicketApi::new();
        api.expect_list_tickets().times(1).returning(|_| Ok(page_of(1)));

        let mut view = CollectionView::default();
        assert!(view.refresh_if_needed(&api).await);
        assert!(!view.refresh_if_needed(&api).await);
    }

    #[tokio::test]
    async fn test_refresh_signal_triggers_fetch() {
        let mut api = MockTicketApi::new();
        api.expect_list_tickets().times(2).returning(|_| Ok(page_of(1)));

        let signal = RefreshSignal::new();
        let mut view = CollectionView::default().with_refresh(signal.subscribe());
        view.refresh_if_needed(&api).await;
        assert!(!view.needs_fetch());

        signal.bump();
        assert!(view.refresh_if_needed(&api).await);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = CollectionView::default();
        let first = view.begin_fetch();
        view.set_status_filter(Some(Status::Open));
        let second = view.begin_fetch();

        assert!(view.complete_fetch(second, Ok(page_of(2))));
        assert!(!view.complete_fetch(first, Ok(page_of(7))));
        assert_eq!(view.tickets().len(), 2);
    }

    #[test]
    fn test_read_failure_keeps_previous_list() {
        let mut view = CollectionView::default();
        let request = view.begin_fetch();
        view.complete_fetch(request, Ok(page_of(4)));

        let request = view.begin_fetch();
        assert!(!view.complete_fetch(request, Err(TicketDeskError::custom("timeout"))));
        assert_eq!(view.tickets().len(), 4);
    }

    #[test]
    fn test_pagination_controls() {
        let mut view = CollectionView::default();
        assert!(!view.has_previous());
        assert!(!view.previous_page());

        let request = view.begin_fetch();
        view.complete_fetch(request, Ok(page_of(10)));
        assert!(view.has_next());
        assert!(view.next_page());
        assert_eq!(view.page(), 2);
        assert!(view.has_previous());

        let request = view.begin_fetch();
        view.complete_fetch(request, Ok(page_of(9)));
        assert!(!view.has_next());
        assert!(!view.next_page());
        assert_eq!(view.page(), 2);

        assert!(view.previous_page());
        assert_eq!(view.page(), 1);
    }

    #[tokio::test]
    async fn test_status_change_refetches_server_state() {
        let mut api = MockTicketApi::new();
        let mut calls = 0;
        api.expect_list_tickets().times(2).returning(move |_| {
            calls += 1;
            let status = if calls == 1 { Status::Open } else { Status::Resolved };
            Ok(TicketPage {
                tickets: vec![create_test_ticket(5, "VPN down", status)],
                total: 1,
            })
        });
        api.expect_update_status()
            .withf(|id: &TicketId, s: &Status| id.as_str() == "5" && *s == Status::Resolved)
            .times(1)
            .returning(|_, _| Ok(create_test_ticket(5, "VPN down", Status::Resolved)));

        let mut view = CollectionView::default();
        view.refresh_if_needed(&api).await;
        let id = TicketId::from(5);
        assert_eq!(view.displayed_status(&id), Some(Status::Open));

        view.change_status(&api, &id, Status::Resolved).await.unwrap();
        assert_eq!(view.displayed_status(&id), Some(Status::Resolved));
    }

    #[tokio::test]
    async fn test_failed_status_change_keeps_displayed_status() {
        let mut api = MockTicketApi::new();
        api.expect_list_tickets().times(1).returning(|_| {
            Ok(TicketPage {
                tickets: vec![create_test_ticket(8, "Invoice wrong", Status::InProgress)],
                total: 1,
            })
        });
        api.expect_update_status()
            .times(1)
            .returning(|_, _| Err(TicketDeskError::Api { status: 500, body: String::new() }));

        let mut view = CollectionView::default();
        view.refresh_if_needed(&api).await;
        let id = TicketId::from(8);
        let err = view.change_status(&api, &id, Status::Resolved).await.unwrap_err();

        assert!(err.is_write_failure());
        assert_eq!(view.displayed_status(&id), Some(Status::InProgress));
    }

    #[test]
    fn test_render_empty_state() {
        let view = CollectionView::default();
        let text = view.render();
        assert!(text.starts_with("No tickets found"));
        assert!(text.contains("Page 1"));
    }

    #[test]
    fn test_render_ticket_lines() {
        let mut view = CollectionView::default();
        let request = view.begin_fetch();
        view.complete_fetch(
            request,
            Ok(TicketPage {
                tickets: vec![create_test_ticket(3, "Refund request", Status::InProgress)],
                total: 1,
            }),
        );
        let text = view.render();
        assert!(text.contains("#3 Refund request"));
        assert!(text.contains("Status: In Progress"));
    }
}
