//! Catalog backend access
//!
//! Defines the `CatalogApi` seam, the request/response messages exchanged with
//! the background worker, and the HTTP implementation.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::field::FieldKind;

mod http;
mod types;
mod worker;

pub use http::HttpCatalog;
pub use types::{BookAuthor, BookPage, BookSummary, Dictionaries, DictionaryEntry, SearchQuery};
pub use worker::{WorkerHandle, spawn_worker};

/// Errors that can occur while talking to the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was abandoned because the worker is shutting down
    #[error("Request cancelled")]
    Cancelled,
}

/// Operations the catalog backend offers to this client
pub trait CatalogApi: Send + Sync {
    /// Fetch up to `limit` completions of `query` for the given field
    fn suggest<'a>(
        &'a self,
        kind: FieldKind,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, ApiError>>;

    /// Run a filtered, paginated book search
    fn search_books<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<BookPage, ApiError>>;

    /// Genres and languages for the search filters
    fn dictionaries(&self) -> BoxFuture<'_, Result<Dictionaries, ApiError>>;
}

/// Request messages sent to the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Autocomplete lookup for one field
    Suggest {
        kind: FieldKind,
        query: String,
        limit: usize,
        /// Per-field sequence number, used to filter stale responses
        request_id: u64,
    },
    /// Book search with filters and pagination
    SearchBooks {
        query: SearchQuery,
        request_id: u64,
    },
    /// Genre and language lists, fetched once at startup
    Dictionaries,
}

/// Response messages received from the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Suggestions {
        kind: FieldKind,
        request_id: u64,
        result: Result<Vec<String>, ApiError>,
    },
    Books {
        request_id: u64,
        result: Result<BookPage, ApiError>,
    },
    Dictionaries {
        result: Result<Dictionaries, ApiError>,
    },
}
