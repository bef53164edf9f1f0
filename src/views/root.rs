//! Root view composing the form, the list and the stats panel

use super::{ClassifyOutcome, CollectionView, StatsView, SubmissionForm};
use crate::api::TicketApi;
use crate::core::{Status, Ticket, TicketId};
use crate::error::Result;
use crate::events::RefreshSignal;

/// Top-level application state
///
/// Owns the refresh signal. A successful submission bumps it once, which
/// makes the list and stats views re-fetch on the next [`RootView::sync`].
pub struct RootView<A> {
    api: A,
    refresh: RefreshSignal,
    form: SubmissionForm,
    collection: CollectionView,
    stats: StatsView,
}

impl<A: TicketApi> RootView<A> {
    pub fn new(api: A, page_size: usize) -> Self {
        let refresh = RefreshSignal::new();
        let collection = CollectionView::new(page_size).with_refresh(refresh.subscribe());
        let stats = StatsView::new().with_refresh(refresh.subscribe());
        Self {
            api,
            refresh,
            form: SubmissionForm::new(),
            collection,
            stats,
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Number of successful submissions so far
    pub fn refresh_count(&self) -> u64 {
        self.refresh.current()
    }

    pub const fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    /// Borrow the form mutably alongside the API
    pub fn form_and_api(&mut self) -> (&mut SubmissionForm, &A) {
        (&mut self.form, &self.api)
    }

    pub const fn collection(&self) -> &CollectionView {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut CollectionView {
        &mut self.collection
    }

    pub const fn stats(&self) -> &StatsView {
        &self.stats
    }

    /// Re-fetch every child view whose inputs changed
    pub async fn sync(&mut self) {
        self.collection.refresh_if_needed(&self.api).await;
        self.stats.refresh_if_needed(&self.api).await;
    }

    /// Mark the list and stats stale without touching the refresh counter
    pub fn reload(&mut self) {
        self.collection.invalidate();
        self.stats.invalidate();
    }

    /// Classify the form's description
    pub async fn classify_description(&mut self) -> ClassifyOutcome {
        self.form.classify_description(&self.api).await
    }

    /// Submit the form; on success bump the refresh signal and re-sync
    pub async fn submit(&mut self) -> Result<Ticket> {
        let refresh = &self.refresh;
        let ticket = self.form.submit(&self.api, |_| refresh.bump()).await?;
        self.sync().await;
        Ok(ticket)
    }

    /// Change a ticket's status from the list
    pub async fn change_status(&mut self, id: &TicketId, status: Status) -> Result<()> {
        self.collection.change_status(&self.api, id, status).await
    }
}
