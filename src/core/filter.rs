use super::{Category, Priority, Status};
use serde::Serialize;

/// Client-side filter and page selection for the ticket list
///
/// `None` means "all" for the enumerated filters. Changing any filter sends
/// the view back to the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    status: Option<Status>,
    category: Option<Category>,
    priority: Option<Priority>,
    search: Option<String>,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: None,
            category: None,
            priority: None,
            search: None,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
        self.page = 1;
    }

    /// Set the free-text search; blank input clears it
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.page = 1;
    }

    /// Jump to a page, clamped to the first page
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Query parameters for the list endpoint
    ///
    /// Filters set to "all" are left out entirely; `page` is always present.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params.push(("page", self.page.to_string()));
        params
    }
}

/// Parse a filter argument where "all" (or nothing) means no filter
pub fn parse_filter<T>(value: Option<&str>) -> crate::error::Result<Option<T>>
where
    T: std::str::FromStr<Err = crate::error::TicketDeskError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}
