//! Catalog API payloads

use serde::Deserialize;

use crate::config::{SearchConfig, SortDirection, SortField};

/// Filters and paging for a book search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: Option<i32>,
    pub genre_id: Option<i64>,
    pub language_id: Option<i64>,
    pub page: u32,
    pub size: u32,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl SearchQuery {
    /// First page of a search using the configured paging and ordering
    pub fn new(title: &str, author: &str, publisher: &str, config: &SearchConfig) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            publication_year: None,
            genre_id: None,
            language_id: None,
            page: 0,
            size: config.page_size,
            sort: config.sort,
            direction: config.direction,
        }
    }

    /// Same filters, different page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Query string parameters; blank filters are left out
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("publisher", &self.publisher),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                params.push((name, value.to_string()));
            }
        }
        if let Some(year) = self.publication_year {
            params.push(("publicationYear", year.to_string()));
        }
        if let Some(id) = self.genre_id {
            params.push(("genreId", id.to_string()));
        }
        if let Some(id) = self.language_id {
            params.push(("languageId", id.to_string()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("size", self.size.to_string()));
        params.push(("sort", self.sort.as_param().to_string()));
        params.push(("direction", self.direction.as_param().to_string()));
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookAuthor {
    pub id: i64,
    pub name: String,
}

/// One row of a book search result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image_file_name: Option<String>,
    pub author: BookAuthor,
}

/// A page of book search results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookPage {
    pub books: Vec<BookSummary>,
    pub total_books: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// One genre or language the backend knows about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    pub id: i64,
    pub name: String,
}

/// Genres and languages usable as search filters (`/dictionaries/`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Dictionaries {
    #[serde(default)]
    pub genres: Vec<DictionaryEntry>,
    #[serde(default)]
    pub languages: Vec<DictionaryEntry>,
}

/// Wire shape of `/books/search` (a Spring `Page`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResponseBody {
    #[serde(default)]
    content: Option<Vec<BookSummary>>,
    #[serde(default)]
    total_elements: u64,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    number: u32,
}

impl From<SearchResponseBody> for BookPage {
    fn from(body: SearchResponseBody) -> Self {
        BookPage {
            books: body.content.unwrap_or_default(),
            total_books: body.total_elements,
            total_pages: body.total_pages,
            current_page: body.number,
        }
    }
}
