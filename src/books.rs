//! Book search results
//!
//! Tracks the last submitted search and the page currently shown. Only the
//! newest search is applied; answers to superseded ones are dropped.

mod books_render;
mod filters;

pub use books_render::render_results;
pub use filters::CatalogFilters;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::{ApiError, ApiRequest, BookPage, Dictionaries, SearchQuery};

pub const SEARCH_FAILED_TEXT: &str = "Failed to fetch books. Please try again.";
pub const DICTIONARIES_FAILED_TEXT: &str = "Failed to load dictionaries";

#[derive(Debug, Default)]
pub struct BookSearchState {
    request_tx: Option<UnboundedSender<ApiRequest>>,
    request_id: u64,
    /// Query of the most recent request, whatever its page
    last_query: Option<SearchQuery>,
    pub page: Option<BookPage>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: CatalogFilters,
}

impl BookSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_request_channel(&mut self, request_tx: UnboundedSender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// Whether a search has been submitted yet
    pub fn has_searched(&self) -> bool {
        self.last_query.is_some()
    }

    /// Send a search; returns whether the worker accepted it
    pub fn submit(&mut self, query: SearchQuery) -> bool {
        self.request_id = self.request_id.wrapping_add(1);
        self.last_query = Some(query.clone());
        self.error = None;

        let Some(tx) = &self.request_tx else {
            return false;
        };
        let request = ApiRequest::SearchBooks {
            query,
            request_id: self.request_id,
        };
        if tx.send(request).is_err() {
            self.loading = false;
            self.error = Some(SEARCH_FAILED_TEXT.to_string());
            return false;
        }
        self.loading = true;
        true
    }

    /// Ask for the genre and language lists
    pub fn load_dictionaries(&mut self) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };
        if tx.send(ApiRequest::Dictionaries).is_err() {
            self.error = Some(DICTIONARIES_FAILED_TEXT.to_string());
            return false;
        }
        true
    }

    pub fn apply_dictionaries(&mut self, result: Result<Dictionaries, ApiError>) {
        match result {
            Ok(dictionaries) => {
                log::debug!(
                    "Loaded {} genres and {} languages",
                    dictionaries.genres.len(),
                    dictionaries.languages.len()
                );
                self.filters.set_dictionaries(dictionaries);
            }
            Err(e) => {
                log::warn!("Loading dictionaries failed: {}", e);
                self.error = Some(DICTIONARIES_FAILED_TEXT.to_string());
            }
        }
    }

    /// Request the page after the current one, if there is one
    pub fn next_page(&mut self) -> bool {
        match (&self.last_query, &self.page) {
            (Some(query), Some(page)) if query.page + 1 < page.total_pages => {
                let next = query.with_page(query.page + 1);
                self.submit(next)
            }
            _ => false,
        }
    }

    /// Request the page before the current one, if there is one
    pub fn prev_page(&mut self) -> bool {
        match &self.last_query {
            Some(query) if query.page > 0 => {
                let prev = query.with_page(query.page - 1);
                self.submit(prev)
            }
            _ => false,
        }
    }

    /// Apply a worker response; stale ones are ignored
    pub fn apply_response(&mut self, request_id: u64, result: Result<BookPage, ApiError>) -> bool {
        if request_id != self.request_id {
            log::debug!(
                "Discarding stale book search #{} (current: #{})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
            }
            Err(e) => {
                log::warn!("Book search #{} failed: {}", request_id, e);
                self.error = Some(SEARCH_FAILED_TEXT.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "books/books_tests.rs"]
mod books_tests;
