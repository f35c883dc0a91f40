// Configuration type definitions

use serde::Deserialize;

/// Default catalog backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Catalog API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request, if present
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            token: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Typeahead behavior for the title/author/publisher inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    /// Quiet interval before a lookup is dispatched
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Maximum number of suggestions requested per lookup
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: default_debounce_ms(),
            limit: default_limit(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_limit() -> usize {
    5
}

/// Book search sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum SortField {
    #[default]
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "publicationYear")]
    PublicationYear,
}

impl SortField {
    /// Value of the `sort` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::PublicationYear => "publicationYear",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::PublicationYear => "Publication Year",
        }
    }

    /// The other sort column
    pub fn next(self) -> SortField {
        match self {
            SortField::Title => SortField::PublicationYear,
            SortField::PublicationYear => SortField::Title,
        }
    }
}

/// Book search sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Value of the `direction` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn toggle(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Page sizes offered when cycling at runtime
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 30];

/// Book search pagination and ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page_size: default_page_size(),
            sort: SortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl SearchConfig {
    /// Next entry of `PAGE_SIZE_OPTIONS` after the current size, wrapping
    ///
    /// A configured size that is not one of the options moves to the first
    /// option above it.
    pub fn next_page_size(&self) -> u32 {
        PAGE_SIZE_OPTIONS
            .into_iter()
            .find(|size| *size > self.page_size)
            .unwrap_or(PAGE_SIZE_OPTIONS[0])
    }
}

fn default_page_size() -> u32 {
    10
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub search: SearchConfig,
}
