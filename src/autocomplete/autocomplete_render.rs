//! Dropdown rendering
//!
//! Draws an open suggestion list directly beneath its input box. The list
//! gets one row per suggestion as long as the terminal has room; when it is
//! cut short it scrolls so the highlighted row is always drawn.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use super::autocomplete_state::AutocompleteState;
use crate::field::FieldKind;
use crate::widgets::popup;

pub const NO_RESULTS_TEXT: &str = "No results found";

const POPUP_BORDER_HEIGHT: u16 = 2;

/// Where the dropdown for `kind` goes, or `None` when it is closed or there
/// is no room below the input
pub fn dropdown_area(
    state: &AutocompleteState,
    kind: FieldKind,
    input_area: Rect,
    bounds: Rect,
) -> Option<Rect> {
    if !state.is_visible(kind) {
        return None;
    }
    let rows = u16::try_from(state.suggestions(kind).len().max(1)).unwrap_or(u16::MAX);
    let height = rows.saturating_add(POPUP_BORDER_HEIGHT);
    let area = popup::popup_below_anchor(input_area, bounds, height);
    (area.height > POPUP_BORDER_HEIGHT).then_some(area)
}

/// Index of the first suggestion drawn in a dropdown of `area`
///
/// Zero unless the highlight would fall below the last visible row.
pub fn dropdown_offset(state: &AutocompleteState, kind: FieldKind, area: Rect) -> usize {
    let rows = area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    match state.field(kind).highlighted {
        Some(i) if rows > 0 => (i + 1).saturating_sub(rows),
        _ => 0,
    }
}

/// Render the dropdown for `kind` into `area`
pub fn render_dropdown(state: &AutocompleteState, kind: FieldKind, frame: &mut Frame, area: Rect) {
    popup::clear_area(frame, area);

    let text_width = area.width.saturating_sub(2) as usize;
    let rows = area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    let offset = dropdown_offset(state, kind, area);
    let field = state.field(kind);

    let items: Vec<ListItem> = if field.items.is_empty() {
        vec![ListItem::new(Line::styled(
            NO_RESULTS_TEXT,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        field
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(i, suggestion)| {
                let text = popup::truncate_to_width(suggestion, text_width);
                let style = if field.highlighted == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::styled(text, style))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
