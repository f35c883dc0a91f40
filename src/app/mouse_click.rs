//! Mouse click handling
//!
//! Any button press first closes every dropdown it landed outside of. A left
//! press then acts on the component under the pointer.

use ratatui::layout::Position;

use super::state::{App, Focus};
use crate::field::FieldKind;
use crate::layout::{Region, region_at};

/// Close the dropdowns whose field does not contain `position`
pub fn dismiss_outside(app: &mut App, position: Position) {
    app.autocomplete
        .dismiss_outside(position, &app.layout.fields);
}

/// Handle a left mouse button press at `position`
pub fn handle_click(app: &mut App, position: Position) {
    dismiss_outside(app, position);

    match region_at(&app.layout, position) {
        Some(Region::Suggestion { kind, index }) => click_suggestion(app, kind, index),
        Some(Region::Input(kind)) => app.focus = Focus::Field(kind),
        Some(Region::Year) => app.focus = Focus::Year,
        // Dropdown borders and the results pane: nothing beyond dismissal
        _ => {}
    }
}

fn click_suggestion(app: &mut App, kind: FieldKind, index: usize) {
    if app
        .autocomplete
        .select_index(kind, index, &mut app.form)
        .is_some()
    {
        app.focus = Focus::Field(kind);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
