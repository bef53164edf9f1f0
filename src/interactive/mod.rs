//! Interactive mode for ticket-desk
//!
//! A menu-driven session over the [`RootView`]: the stats panel and the
//! current ticket page are redrawn after every action, tickets can be
//! submitted (with classifier suggestions), filtered, paged and triaged.

use crate::api::TicketApi;
use crate::cli::handlers::common::classify_with_spinner;
use crate::cli::output::OutputFormatter;
use crate::core::{Category, Priority, Status, TITLE_MAX_LEN, Ticket};
use crate::error::Result;
use crate::views::{ClassifyOutcome, RootView};
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Submit,
    ChangeStatus,
    FilterStatus,
    FilterCategory,
    FilterPriority,
    Search,
    NextPage,
    PreviousPage,
    Refresh,
    Quit,
}

impl MenuAction {
    pub const ALL: [Self; 10] = [
        Self::Submit,
        Self::ChangeStatus,
        Self::FilterStatus,
        Self::FilterCategory,
        Self::FilterPriority,
        Self::Search,
        Self::NextPage,
        Self::PreviousPage,
        Self::Refresh,
        Self::Quit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit a ticket",
            Self::ChangeStatus => "Change ticket status",
            Self::FilterStatus => "Filter by status",
            Self::FilterCategory => "Filter by category",
            Self::FilterPriority => "Filter by priority",
            Self::Search => "Search",
            Self::NextPage => "Next page",
            Self::PreviousPage => "Previous page",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        }
    }
}

/// Menu entries available for the current view state
///
/// Paging entries are left out while their control would be disabled.
pub fn available_actions<A: TicketApi>(root: &RootView<A>) -> Vec<MenuAction> {
    let collection = root.collection();
    MenuAction::ALL
        .into_iter()
        .filter(|action| match action {
            MenuAction::NextPage => collection.has_next(),
            MenuAction::PreviousPage => collection.has_previous(),
            MenuAction::ChangeStatus => !collection.tickets().is_empty(),
            _ => true,
        })
        .collect()
}

/// One-line summary of a ticket for selection lists
pub fn format_ticket_for_selection(ticket: &Ticket) -> String {
    let status_icon = match ticket.status {
        Status::Open => "○",
        Status::InProgress => "◐",
        Status::Resolved => "●",
    };

    let priority_icon = match ticket.priority {
        Priority::Low => "↓",
        Priority::Medium => "→",
        Priority::High => "↑",
        Priority::Critical => "⚡",
    };

    format!(
        "{} {} #{} {} ({})",
        status_icon, priority_icon, ticket.id, ticket.title, ticket.category
    )
}

/// Interactive session state
pub struct InteractiveSession<'a, A> {
    theme: ColorfulTheme,
    root: RootView<A>,
    output: &'a OutputFormatter,
}

impl<'a, A: TicketApi> InteractiveSession<'a, A> {
    pub fn new(root: RootView<A>, output: &'a OutputFormatter) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            root,
            output,
        }
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.output.heading("Support Ticket System");

        loop {
            self.root.sync().await;
            self.draw();

            let actions = available_actions(&self.root);
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            let selection = Select::with_theme(&self.theme)
                .with_prompt("What would you like to do?")
                .items(&labels)
                .default(0)
                .interact()?;

            match actions[selection] {
                MenuAction::Submit => self.submit().await?,
                MenuAction::ChangeStatus => self.change_status().await?,
                MenuAction::FilterStatus => {
                    let status = self.select_filter("Status", &Status::ALL.map(Status::label))?;
                    self.root
                        .collection_mut()
                        .set_status_filter(status.map(|i| Status::ALL[i]));
                },
                MenuAction::FilterCategory => {
                    let category =
                        self.select_filter("Category", &Category::ALL.map(Category::label))?;
                    self.root
                        .collection_mut()
                        .set_category_filter(category.map(|i| Category::ALL[i]));
                },
                MenuAction::FilterPriority => {
                    let priority =
                        self.select_filter("Priority", &Priority::ALL.map(Priority::label))?;
                    self.root
                        .collection_mut()
                        .set_priority_filter(priority.map(|i| Priority::ALL[i]));
                },
                MenuAction::Search => {
                    let current = self.root.collection().filters().search().unwrap_or_default().to_string();
                    let search = Input::<String>::with_theme(&self.theme)
                        .with_prompt("Search (empty to clear)")
                        .with_initial_text(current)
                        .allow_empty(true)
                        .interact_text()?;
                    self.root.collection_mut().set_search(Some(search));
                },
                MenuAction::NextPage => {
                    self.root.collection_mut().next_page();
                },
                MenuAction::PreviousPage => {
                    self.root.collection_mut().previous_page();
                },
                MenuAction::Refresh => self.root.reload(),
                MenuAction::Quit => break,
            }
        }

        Ok(())
    }

    fn draw(&self) {
        self.output.info("");
        self.output.heading("Support Ticket Statistics");
        self.output.block(&self.root.stats().render());
        self.output.info("");
        self.output
            .heading(&format!("Tickets ({} total)", self.root.collection().total()));
        self.output.block(&self.root.collection().render());
    }

    /// Pick a filter value; index 0 is "All"
    fn select_filter(&self, name: &str, labels: &[&str]) -> Result<Option<usize>> {
        let mut items = vec!["All"];
        items.extend_from_slice(labels);
        let selection = Select::with_theme(&self.theme)
            .with_prompt(name)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(selection.checked_sub(1))
    }

    /// Walk through the form; the draft survives a failed submission
    async fn submit(&mut self) -> Result<()> {
        let draft = self.root.form().draft().clone();

        let title = Input::<String>::with_theme(&self.theme)
            .with_prompt("Title")
            .with_initial_text(draft.title)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if input.trim().is_empty() {
                    Err("Title is required".to_string())
                } else if input.encode_utf16().count() > TITLE_MAX_LEN {
                    Err(format!("Title cannot exceed {TITLE_MAX_LEN} characters"))
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        self.root.form_mut().set_title(title);

        let description = Input::<String>::with_theme(&self.theme)
            .with_prompt("Description")
            .with_initial_text(draft.description)
            .interact_text()?;
        self.root.form_mut().set_description(description);

        // Description is complete: ask for suggestions before the selects
        let (form, api) = self.root.form_and_api();
        let outcome = classify_with_spinner(form, api, self.output).await;
        if let ClassifyOutcome::Applied(_) = outcome {
            self.output.info("Applied suggested category/priority");
        }

        let current = self.root.form().draft().clone();
        let category = Select::with_theme(&self.theme)
            .with_prompt("Category")
            .items(&Category::ALL.map(Category::label))
            .default(index_of(&Category::ALL, current.category))
            .interact()?;
        self.root.form_mut().set_category(Category::ALL[category]);

        let priority = Select::with_theme(&self.theme)
            .with_prompt("Priority")
            .items(&Priority::ALL.map(Priority::label))
            .default(index_of(&Priority::ALL, current.priority))
            .interact()?;
        self.root.form_mut().set_priority(Priority::ALL[priority]);

        match self.root.submit().await {
            Ok(ticket) => {
                self.output
                    .success(&format!("Created ticket #{} '{}'", ticket.id, ticket.title));
            },
            Err(e) => self.output.error(&e.user_message()),
        }
        Ok(())
    }

    async fn change_status(&mut self) -> Result<()> {
        let tickets = self.root.collection().tickets().to_vec();
        let items: Vec<String> = tickets.iter().map(format_ticket_for_selection).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Ticket")
            .items(&items)
            .default(0)
            .interact()?;
        let ticket = &tickets[selection];

        let status = Select::with_theme(&self.theme)
            .with_prompt("Status")
            .items(&Status::ALL.map(Status::label))
            .default(index_of(&Status::ALL, ticket.status))
            .interact()?;

        if let Err(e) = self.root.change_status(&ticket.id, Status::ALL[status]).await {
            self.output.error(&e.user_message());
        }
        Ok(())
    }
}

fn index_of<T: PartialEq>(all: &[T], value: T) -> usize {
    all.iter().position(|v| *v == value).unwrap_or(0)
}
