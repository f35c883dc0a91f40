//! Terminal front end for a library catalog: search books by title, author
//! and publisher, with typeahead suggestions on each field.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod books;
pub mod config;
pub mod error;
pub mod field;
pub mod layout;
pub mod widgets;

#[cfg(test)]
mod test_utils;
