//! Applying a chosen suggestion to the host form

use super::autocomplete_state::AutocompleteState;
use crate::field::FieldKind;

/// The form that owns the title/author/publisher values
pub trait HostForm {
    fn set_title(&mut self, value: &str);
    fn set_author(&mut self, value: &str);
    fn set_publisher(&mut self, value: &str);

    fn set_field(&mut self, kind: FieldKind, value: &str) {
        match kind {
            FieldKind::Title => self.set_title(value),
            FieldKind::Author => self.set_author(value),
            FieldKind::Publisher => self.set_publisher(value),
        }
    }
}

impl AutocompleteState {
    /// Write `suggestion` into the host field for `kind` and close its dropdown
    ///
    /// Also drops the field's pending debounce and invalidates any lookup still
    /// in flight, so the committed value is not followed by a dropdown for
    /// what the user typed before choosing. Other fields are left alone.
    pub fn select(&mut self, kind: FieldKind, suggestion: &str, host: &mut impl HostForm) {
        log::debug!("Selected {} suggestion {:?}", kind, suggestion);
        host.set_field(kind, suggestion);
        self.gate.cancel(kind);
        self.next_request_id(kind);
        self.dismiss(kind);
    }

    /// Commit the suggestion at `index` of an open dropdown
    pub fn select_index(
        &mut self,
        kind: FieldKind,
        index: usize,
        host: &mut impl HostForm,
    ) -> Option<String> {
        if !self.is_visible(kind) {
            return None;
        }
        let suggestion = self.fields[kind].items.get(index).cloned()?;
        self.select(kind, &suggestion, host);
        Some(suggestion)
    }

    /// Commit the keyboard-highlighted suggestion, if any
    pub fn select_highlighted(
        &mut self,
        kind: FieldKind,
        host: &mut impl HostForm,
    ) -> Option<String> {
        let index = self.fields[kind].highlighted?;
        self.select_index(kind, index, host)
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod commit_tests;
