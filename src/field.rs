//! Searchable book fields
//!
//! `FieldKind` names the three form inputs that carry typeahead suggestions.
//! `FieldMap` holds one value per kind so per-field state (timers, request
//! counters, suggestion lists, screen regions) is keyed explicitly instead of
//! being spread over parallel variables.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A search form field with autocomplete support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Title,
    Author,
    Publisher,
}

impl FieldKind {
    /// All field kinds in form order (left to right)
    pub const ALL: [FieldKind; 3] = [FieldKind::Title, FieldKind::Author, FieldKind::Publisher];

    /// Path segment used by the autocomplete endpoint
    pub fn endpoint_segment(self) -> &'static str {
        match self {
            FieldKind::Title => "titles",
            FieldKind::Author => "authors",
            FieldKind::Publisher => "publishers",
        }
    }

    /// Label shown on the input border
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Author => "Author",
            FieldKind::Publisher => "Publisher",
        }
    }

    /// Next field in form order, wrapping around
    pub fn next(self) -> FieldKind {
        match self {
            FieldKind::Title => FieldKind::Author,
            FieldKind::Author => FieldKind::Publisher,
            FieldKind::Publisher => FieldKind::Title,
        }
    }

    /// Previous field in form order, wrapping around
    pub fn prev(self) -> FieldKind {
        match self {
            FieldKind::Title => FieldKind::Publisher,
            FieldKind::Author => FieldKind::Title,
            FieldKind::Publisher => FieldKind::Author,
        }
    }

    fn slot(self) -> usize {
        match self {
            FieldKind::Title => 0,
            FieldKind::Author => 1,
            FieldKind::Publisher => 2,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Title => write!(f, "title"),
            FieldKind::Author => write!(f, "author"),
            FieldKind::Publisher => write!(f, "publisher"),
        }
    }
}

/// Fixed arena with exactly one value per field kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    slots: [T; 3],
}

impl<T> FieldMap<T> {
    /// Build a map by computing the value for each kind
    pub fn from_fn(mut f: impl FnMut(FieldKind) -> T) -> Self {
        Self {
            slots: FieldKind::ALL.map(&mut f),
        }
    }

    pub fn get(&self, kind: FieldKind) -> &T {
        &self.slots[kind.slot()]
    }

    pub fn get_mut(&mut self, kind: FieldKind) -> &mut T {
        &mut self.slots[kind.slot()]
    }

    /// Iterate `(kind, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &T)> {
        FieldKind::ALL.into_iter().zip(self.slots.iter())
    }

    /// Iterate `(kind, value)` pairs mutably in form order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FieldKind, &mut T)> {
        FieldKind::ALL.into_iter().zip(self.slots.iter_mut())
    }
}

impl<T> Index<FieldKind> for FieldMap<T> {
    type Output = T;

    fn index(&self, kind: FieldKind) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<FieldKind> for FieldMap<T> {
    fn index_mut(&mut self, kind: FieldKind) -> &mut T {
        self.get_mut(kind)
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
