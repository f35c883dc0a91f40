use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, TextArea};

use crate::api::{ApiRequest, ApiResponse, SearchQuery};
use crate::autocomplete::{AutocompleteState, HostForm};
use crate::books::BookSearchState;
use crate::config::{Config, SearchConfig};
use crate::field::{FieldKind, FieldMap};
use crate::layout::LayoutRegions;

/// Longest the event loop waits for input before ticking anyway
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which input receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldKind),
    Year,
}

impl Focus {
    /// Next input in form order, wrapping around
    pub fn next(self) -> Focus {
        match self {
            Focus::Field(FieldKind::Publisher) => Focus::Year,
            Focus::Field(kind) => Focus::Field(kind.next()),
            Focus::Year => Focus::Field(FieldKind::Title),
        }
    }

    /// Previous input in form order, wrapping around
    pub fn prev(self) -> Focus {
        match self {
            Focus::Field(FieldKind::Title) => Focus::Year,
            Focus::Field(kind) => Focus::Field(kind.prev()),
            Focus::Year => Focus::Field(FieldKind::Publisher),
        }
    }

    /// The autocompleted field, if one is focused
    pub fn field(self) -> Option<FieldKind> {
        match self {
            Focus::Field(kind) => Some(kind),
            Focus::Year => None,
        }
    }
}

/// The title/author/publisher inputs plus the publication year
pub struct SearchForm {
    inputs: FieldMap<TextArea<'static>>,
    year: TextArea<'static>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            inputs: FieldMap::from_fn(|_| new_input(String::new())),
            year: new_input(String::new()),
        }
    }

    pub fn year_input(&self) -> &TextArea<'static> {
        &self.year
    }

    pub fn year_input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.year
    }

    /// Publication year filter; unset when blank or not a number
    pub fn publication_year(&self) -> Option<i32> {
        self.year.lines().join("").trim().parse().ok()
    }

    /// Current text of a field
    pub fn value(&self, kind: FieldKind) -> String {
        self.inputs[kind].lines().join("")
    }

    pub fn input(&self, kind: FieldKind) -> &TextArea<'static> {
        &self.inputs[kind]
    }

    pub fn input_mut(&mut self, kind: FieldKind) -> &mut TextArea<'static> {
        &mut self.inputs[kind]
    }

    /// Replace a field's text, leaving the cursor at the end
    pub fn set_value(&mut self, kind: FieldKind, value: &str) {
        self.inputs[kind] = new_input(value.to_string());
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl HostForm for SearchForm {
    fn set_title(&mut self, value: &str) {
        self.set_value(FieldKind::Title, value);
    }

    fn set_author(&mut self, value: &str) {
        self.set_value(FieldKind::Author, value);
    }

    fn set_publisher(&mut self, value: &str) {
        self.set_value(FieldKind::Publisher, value);
    }
}

fn new_input(value: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value]);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Application state
pub struct App {
    pub form: SearchForm,
    pub autocomplete: AutocompleteState,
    pub books: BookSearchState,
    pub focus: Focus,
    /// Where things were drawn in the last frame, for mouse hit testing
    pub layout: LayoutRegions,
    /// One-line message shown under the results
    pub status: Option<String>,
    pub should_quit: bool,
    pub(super) suggestion_limit: usize,
    /// Page size and ordering, changeable at runtime
    pub search_config: SearchConfig,
    response_rx: Receiver<ApiResponse>,
}

impl App {
    /// Create the app wired to an API worker's channels
    pub fn new(
        config: &Config,
        request_tx: UnboundedSender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) -> Self {
        let mut autocomplete =
            AutocompleteState::new(Duration::from_millis(config.autocomplete.debounce_ms));
        autocomplete.set_request_channel(request_tx.clone());

        let mut books = BookSearchState::new();
        books.set_request_channel(request_tx);

        Self {
            form: SearchForm::new(),
            autocomplete,
            books,
            focus: Focus::Field(FieldKind::Title),
            layout: LayoutRegions::default(),
            status: None,
            should_quit: false,
            suggestion_limit: config.autocomplete.limit,
            search_config: config.search,
            response_rx,
        }
    }

    /// Ask the worker for the genre and language filter lists
    pub fn load_dictionaries(&mut self) -> bool {
        self.books.load_dictionaries()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Run due debounced lookups and apply worker responses
    pub fn tick(&mut self, now: Instant) {
        self.poll_responses();
        self.autocomplete.tick(now);
    }

    /// Apply every response the worker has delivered so far
    ///
    /// Returns how many responses were applied (stale ones are not counted).
    pub fn poll_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(response) = self.response_rx.try_recv() {
            let used = match response {
                ApiResponse::Suggestions {
                    kind,
                    request_id,
                    result,
                } => self.autocomplete.apply_response(kind, request_id, result),
                ApiResponse::Books { request_id, result } => {
                    self.books.apply_response(request_id, result)
                }
                ApiResponse::Dictionaries { result } => {
                    self.books.apply_dictionaries(result);
                    true
                }
            };
            if used {
                applied += 1;
            }
        }
        applied
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.autocomplete.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(MAX_POLL_INTERVAL),
            None => MAX_POLL_INTERVAL,
        }
    }

    /// Search with the current form values and filters, from the first page
    pub fn submit_search(&mut self) -> bool {
        let mut query = SearchQuery::new(
            &self.form.value(FieldKind::Title),
            &self.form.value(FieldKind::Author),
            &self.form.value(FieldKind::Publisher),
            &self.search_config,
        );
        query.publication_year = self.form.publication_year();
        query.genre_id = self.books.filters.genre().map(|g| g.id);
        query.language_id = self.books.filters.language().map(|l| l.id);

        for kind in FieldKind::ALL {
            self.autocomplete.dismiss(kind);
        }
        self.books.submit(query)
    }

    /// Switch between sorting by title and by publication year
    pub fn cycle_sort(&mut self) -> bool {
        self.search_config.sort = self.search_config.sort.next();
        self.research()
    }

    pub fn toggle_direction(&mut self) -> bool {
        self.search_config.direction = self.search_config.direction.toggle();
        self.research()
    }

    pub fn cycle_page_size(&mut self) -> bool {
        self.search_config.page_size = self.search_config.next_page_size();
        self.research()
    }

    /// Rerun an earlier search from page 0 after the ordering or page size
    /// changed; nothing happens before the first search
    fn research(&mut self) -> bool {
        if !self.books.has_searched() {
            return false;
        }
        self.submit_search()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
