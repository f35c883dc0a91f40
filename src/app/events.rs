//! Keyboard and mouse dispatch
//!
//! Global shortcuts are checked first; everything else acts on the focused
//! input. Ctrl shortcuts change the search filters and ordering.

use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::mouse_click;
use super::state::{App, Focus};

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        let focus = self.focus;
        match key.code {
            KeyCode::Tab => self.focus = focus.next(),
            KeyCode::BackTab => self.focus = focus.prev(),
            KeyCode::Down => self.move_highlight(1),
            KeyCode::Up => self.move_highlight(-1),
            KeyCode::Enter => {
                let committed = focus
                    .field()
                    .and_then(|kind| self.autocomplete.select_highlighted(kind, &mut self.form));
                if committed.is_none() {
                    self.submit_search();
                }
            }
            KeyCode::Esc => match focus.field() {
                Some(kind) if self.autocomplete.is_visible(kind) => {
                    self.autocomplete.dismiss(kind)
                }
                _ => self.should_quit = true,
            },
            KeyCode::PageDown => {
                self.books.next_page();
            }
            KeyCode::PageUp => {
                self.books.prev_page();
            }
            _ => self.edit_focused_input(key, now),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            // Ctrl+C: Exit application
            KeyCode::Char('c') => self.should_quit = true,
            KeyCode::Char('g') => self.books.filters.cycle_genre(),
            KeyCode::Char('l') => self.books.filters.cycle_language(),
            KeyCode::Char('s') => {
                self.cycle_sort();
            }
            KeyCode::Char('d') => {
                self.toggle_direction();
            }
            KeyCode::Char('p') => {
                self.cycle_page_size();
            }
            _ => return false,
        }
        true
    }

    fn move_highlight(&mut self, delta: isize) {
        if let Some(kind) = self.focus.field() {
            self.autocomplete.move_highlight(kind, delta);
        }
    }

    /// Forward an editing key to the focused input
    ///
    /// Text fields debounce a lookup; the year field only takes digits.
    fn edit_focused_input(&mut self, key: KeyEvent, now: Instant) {
        if inserts_newline(&key) {
            return;
        }
        match self.focus {
            Focus::Field(kind) => {
                if self.form.input_mut(kind).input(key) {
                    let query = self.form.value(kind);
                    self.autocomplete
                        .on_input(kind, &query, self.suggestion_limit, now);
                }
            }
            Focus::Year => {
                if let KeyCode::Char(c) = key.code
                    && !c.is_ascii_digit()
                {
                    return;
                }
                self.form.year_input_mut().input(key);
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(button) = mouse.kind else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        match button {
            MouseButton::Left => mouse_click::handle_click(self, position),
            // Any press outside a dropdown closes it; only left clicks act
            _ => mouse_click::dismiss_outside(self, position),
        }
    }
}

/// Inputs are single-line; textarea would otherwise split on these
fn inserts_newline(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
