//! Dropdown visibility
//!
//! Each field's dropdown is either Hidden or Visible. It opens when a lookup
//! for a non-empty query succeeds (an empty result still opens it, to show
//! "No results found") and closes on a blank query, a failed lookup, a
//! selection, or a mouse-down outside the field.
//!
//! Outside clicks are judged against a registry of screen regions filled in
//! by the renderer: for every field, the input box and (while drawn) its
//! dropdown. One handler checks every field on every mouse-down.

use ratatui::layout::{Position, Rect};

use super::autocomplete_state::AutocompleteState;
use crate::field::{FieldKind, FieldMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Screen areas that belong to one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRegions {
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
    /// Index of the suggestion on the dropdown's first row
    pub dropdown_offset: usize,
}

impl FieldRegions {
    /// Whether a position falls on the field's input or its dropdown
    pub fn contains(&self, position: Position) -> bool {
        [self.input, self.dropdown]
            .into_iter()
            .flatten()
            .any(|area| area.contains(position))
    }
}

/// Per-field region registry, rebuilt every frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownRegions {
    fields: FieldMap<FieldRegions>,
}

impl DropdownRegions {
    pub fn get(&self, kind: FieldKind) -> &FieldRegions {
        &self.fields[kind]
    }

    pub fn set_input(&mut self, kind: FieldKind, area: Rect) {
        self.fields[kind].input = Some(area);
    }

    pub fn set_dropdown(&mut self, kind: FieldKind, area: Option<Rect>) {
        self.fields[kind].dropdown = area;
    }

    pub fn set_dropdown_offset(&mut self, kind: FieldKind, offset: usize) {
        self.fields[kind].dropdown_offset = offset;
    }

    /// Forget dropdown areas (before a frame redraws whatever is open)
    pub fn clear_dropdowns(&mut self) {
        for (_, regions) in self.fields.iter_mut() {
            regions.dropdown = None;
            regions.dropdown_offset = 0;
        }
    }

    /// Field whose input box contains the position
    pub fn input_at(&self, position: Position) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(_, r)| r.input.is_some_and(|area| area.contains(position)))
            .map(|(kind, _)| kind)
    }

    /// Field whose dropdown contains the position
    pub fn dropdown_at(&self, position: Position) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(_, r)| r.dropdown.is_some_and(|area| area.contains(position)))
            .map(|(kind, _)| kind)
    }
}

impl AutocompleteState {
    pub fn is_visible(&self, kind: FieldKind) -> bool {
        self.fields[kind].visibility == Visibility::Visible
    }

    /// Any dropdown currently open
    pub fn visible_fields(&self) -> Vec<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .filter(|kind| self.is_visible(*kind))
            .collect()
    }

    /// Close the dropdown and drop its suggestions
    pub fn dismiss(&mut self, kind: FieldKind) {
        self.fields[kind].clear();
    }

    /// Close every open dropdown whose field does not contain `position`
    ///
    /// Returns the fields that were closed.
    pub fn dismiss_outside(
        &mut self,
        position: Position,
        regions: &DropdownRegions,
    ) -> Vec<FieldKind> {
        let outside: Vec<FieldKind> = self
            .visible_fields()
            .into_iter()
            .filter(|kind| !regions.get(*kind).contains(position))
            .collect();
        for kind in &outside {
            log::debug!("Click outside {} dropdown, closing", kind);
            self.dismiss(*kind);
        }
        outside
    }

    /// Move the keyboard highlight of an open dropdown, clamped to its rows
    pub fn move_highlight(&mut self, kind: FieldKind, delta: isize) {
        let field = &mut self.fields[kind];
        if field.visibility != Visibility::Visible || field.items.is_empty() {
            return;
        }
        let last = field.items.len() - 1;
        field.highlighted = Some(match field.highlighted {
            None if delta >= 0 => 0,
            None => last,
            Some(i) => i.saturating_add_signed(delta).min(last),
        });
    }

    /// Text of the highlighted suggestion, if the dropdown is open
    pub fn highlighted(&self, kind: FieldKind) -> Option<&str> {
        let field = &self.fields[kind];
        if field.visibility != Visibility::Visible {
            return None;
        }
        field
            .highlighted
            .and_then(|i| field.items.get(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "dropdown_tests.rs"]
mod dropdown_tests;
