//! Aggregate statistics panel

use crate::api::TicketApi;
use crate::core::StatsSnapshot;
use crate::events::RefreshListener;
use std::fmt::Write as _;
use tracing::{debug, warn};

/// State of the statistics panel
///
/// Fetches on first use and whenever the refresh signal fires. Read failures
/// keep the last known snapshot.
#[derive(Debug)]
pub struct StatsView {
    snapshot: StatsSnapshot,
    dirty: bool,
    refresh: Option<RefreshListener>,
}

impl Default for StatsView {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsView {
    pub fn new() -> Self {
        Self {
            snapshot: StatsSnapshot::default(),
            dirty: true,
            refresh: None,
        }
    }

    #[must_use]
    pub fn with_refresh(mut self, listener: RefreshListener) -> Self {
        self.refresh = Some(listener);
        self
    }

    pub const fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    /// Force a re-fetch on the next sync
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn needs_fetch(&mut self) -> bool {
        let refreshed = self.refresh.as_mut().is_some_and(RefreshListener::take_change);
        self.dirty |= refreshed;
        self.dirty
    }

    /// Fetch a new snapshot; returns true if it was replaced
    pub async fn fetch<A>(&mut self, api: &A) -> bool
    where
        A: TicketApi + ?Sized,
    {
        self.dirty = false;
        match api.stats().await {
            Ok(snapshot) => {
                debug!(total = snapshot.total_tickets, "Stats updated");
                self.snapshot = snapshot;
                true
            },
            Err(e) => {
                warn!("Error fetching stats: {e}");
                false
            },
        }
    }

    pub async fn refresh_if_needed<A>(&mut self, api: &A) -> bool
    where
        A: TicketApi + ?Sized,
    {
        if !self.needs_fetch() {
            return false;
        }
        self.fetch(api).await
    }

    /// "High: 2" style lines for the priorities present in the snapshot
    pub fn priority_lines(&self) -> Vec<String> {
        self.snapshot
            .tickets_by_priority
            .iter()
            .map(|(priority, count)| format!("{}: {count}", capitalize(priority.as_str())))
            .collect()
    }

    /// Category lines, when the backend reports a category breakdown
    pub fn category_lines(&self) -> Vec<String> {
        self.snapshot
            .tickets_by_category
            .iter()
            .flatten()
            .map(|(category, count)| format!("{}: {count}", capitalize(category.as_str())))
            .collect()
    }

    pub fn render(&self) -> String {
        let s = &self.snapshot;
        let mut out = String::new();
        let _ = writeln!(out, "Total Tickets: {}", s.total_tickets);
        let _ = writeln!(out, "Open Tickets: {}", s.open_tickets);
        let _ = writeln!(
            out,
            "Avg Resolution Time: {} days",
            s.rounded_avg_resolution_time()
        );
        if let Some(per_day) = s.avg_tickets_per_day {
            let _ = writeln!(out, "Avg Tickets Per Day: {per_day}");
        }
        out.push_str("Tickets by Priority:\n");
        for line in self.priority_lines() {
            let _ = writeln!(out, "  {line}");
        }
        let categories = self.category_lines();
        if !categories.is_empty() {
            out.push_str("Tickets by Category:\n");
            for line in categories {
                let _ = writeln!(out, "  {line}");
            }
        }
        out
    }
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
