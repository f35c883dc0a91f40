//! Genre and language filters
//!
//! The choices come from the backend's dictionaries, loaded once. Each
//! filter is either unset ("Any") or one entry of its list.

use crate::api::{Dictionaries, DictionaryEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    dictionaries: Dictionaries,
    genre: Option<usize>,
    language: Option<usize>,
}

impl CatalogFilters {
    /// Replace the available choices; both selections reset to "Any"
    pub fn set_dictionaries(&mut self, dictionaries: Dictionaries) {
        self.dictionaries = dictionaries;
        self.genre = None;
        self.language = None;
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Step to the next genre; after the last one the filter is cleared
    pub fn cycle_genre(&mut self) {
        self.genre = cycle(self.genre, self.dictionaries.genres.len());
    }

    /// Step to the next language; after the last one the filter is cleared
    pub fn cycle_language(&mut self) {
        self.language = cycle(self.language, self.dictionaries.languages.len());
    }

    pub fn genre(&self) -> Option<&DictionaryEntry> {
        self.genre.and_then(|i| self.dictionaries.genres.get(i))
    }

    pub fn language(&self) -> Option<&DictionaryEntry> {
        self.language.and_then(|i| self.dictionaries.languages.get(i))
    }
}

fn cycle(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None if len > 0 => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        _ => None,
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod filters_tests;
