//! View-state models
//!
//! Each view owns its local state and turns API failures into its own
//! behavior (silent, logged, or returned for the caller to show). Errors never
//! cross from one view into another.

mod collection;
mod form;
mod root;
mod stats;

pub use collection::{CollectionView, FetchRequest};
pub use form::{ClassifyOutcome, SubmissionForm, TicketDraft};
pub use root::RootView;
pub use stats::{StatsView, capitalize};

/// Monotonic request numbering for a single view
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Hand out the next sequence number
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Most recently issued number (0 before the first request)
    pub const fn latest(&self) -> u64 {
        self.latest
    }

    pub const fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest
    }
}
