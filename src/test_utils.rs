//! Test utilities for ticket-desk
//!
//! Common fixtures shared by the unit tests.

#![cfg(test)]

use crate::api::TicketPage;
use crate::core::{Category, Priority, Status, Ticket, TicketBuilder};

/// Create a test ticket with default category and priority
pub fn create_test_ticket(id: u64, title: &str, status: Status) -> Ticket {
    TicketBuilder::new()
        .id(id)
        .title(title)
        .description(format!("Description for {title}"))
        .category(Category::General)
        .priority(Priority::Medium)
        .status(status)
        .build()
}

/// A bare-list style page holding `count` open tickets
pub fn page_of(count: usize) -> TicketPage {
    TestDataBuilder::new()
        .with_tickets_in_status(Status::Open, count)
        .build_page()
}

/// Test data builder for list responses
pub struct TestDataBuilder {
    tickets: Vec<Ticket>,
}

impl TestDataBuilder {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
        }
    }

    /// Add a ticket with specific properties
    pub fn with_ticket(mut self, title: &str, priority: Priority, status: Status) -> Self {
        let mut ticket = create_test_ticket(self.next_id(), title, status);
        ticket.priority = priority;
        self.tickets.push(ticket);
        self
    }

    /// Add multiple tickets with the same status
    pub fn with_tickets_in_status(mut self, status: Status, count: usize) -> Self {
        for i in 1..=count {
            let ticket = create_test_ticket(self.next_id(), &format!("{status} ticket {i}"), status);
            self.tickets.push(ticket);
        }
        self
    }

    fn next_id(&self) -> u64 {
        self.tickets.len() as u64 + 1
    }

    /// Build a page whose total is the number of tickets
    pub fn build_page(self) -> TicketPage {
        TicketPage {
            total: self.tickets.len() as u64,
            tickets: self.tickets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder() {
        let page = TestDataBuilder::new()
            .with_ticket("Bug fix", Priority::High, Status::Open)
            .with_tickets_in_status(Status::InProgress, 2)
            .build_page();

        assert_eq!(page.total, 3);
        assert_eq!(page.tickets[0].title, "Bug fix");
        assert_eq!(page.tickets[0].priority, Priority::High);
        assert_eq!(page.tickets[1].status, Status::InProgress);
        assert_eq!(page.tickets[2].id.as_str(), "3");
    }
}
