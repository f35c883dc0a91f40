use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::autocomplete::{dropdown_area, dropdown_offset, render_dropdown};
use crate::books::render_results;
use crate::field::FieldKind;

const KEY_HELP: &str = "Tab: next field | Enter: search | PgUp/PgDn: page | ^G/^L: genre/language | ^S/^D/^P: sort/direction/size | Esc: quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Text inputs, then filters, then results, one status line at the bottom
        let [inputs_area, filters_area, results_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let input_areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .areas(inputs_area);
        for (kind, area) in FieldKind::ALL.into_iter().zip(input_areas) {
            self.render_input_field(frame, kind, area);
        }

        self.render_filters(frame, filters_area);

        render_results(&self.books, frame, results_area);
        self.layout.results = Some(results_area);

        self.render_status_line(frame, status_area);

        // Dropdowns last so they overlay everything below the inputs
        self.render_dropdowns(frame);
    }

    fn render_input_field(&mut self, frame: &mut Frame, kind: FieldKind, area: Rect) {
        let focused = self.focus == Focus::Field(kind);
        let textarea = self.form.input_mut(kind);
        style_input(textarea, kind.label(), focused);
        frame.render_widget(&*textarea, area);
        self.layout.fields.set_input(kind, area);
    }

    /// Year input, genre and language choices, ordering and page size
    fn render_filters(&mut self, frame: &mut Frame, area: Rect) {
        let [year_area, genre_area, language_area, order_area] =
            Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);

        let focused = self.focus == Focus::Year;
        let year = self.form.year_input_mut();
        style_input(year, "Year", focused);
        frame.render_widget(&*year, year_area);
        self.layout.year = Some(year_area);

        let filters = &self.books.filters;
        let genre = filters.genre().map_or("Any", |g| g.name.as_str());
        let language = filters.language().map_or("Any", |l| l.name.as_str());
        let order = format!(
            "{} {}, {}/page",
            self.search_config.sort.label(),
            self.search_config.direction.as_param(),
            self.search_config.page_size
        );

        for (title, value, area) in [
            (" Genre ^G ", genre.to_string(), genre_area),
            (" Language ^L ", language.to_string(), language_area),
            (" Order ^S/^D/^P ", order, order_area),
        ] {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(value).block(block), area);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        // A failed search outranks older messages such as a config warning
        let line = match (&self.books.error, &self.status) {
            (Some(error), _) => Line::styled(error.as_str(), Style::default().fg(Color::Red)),
            (None, Some(status)) => Line::styled(status.as_str(), Style::default().fg(Color::Yellow)),
            (None, None) => Line::styled(KEY_HELP, Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_dropdowns(&mut self, frame: &mut Frame) {
        self.layout.fields.clear_dropdowns();
        let bounds = frame.area();
        for kind in FieldKind::ALL {
            let Some(input_area) = self.layout.fields.get(kind).input else {
                continue;
            };
            let area = dropdown_area(&self.autocomplete, kind, input_area, bounds);
            if let Some(area) = area {
                render_dropdown(&self.autocomplete, kind, frame, area);
                let offset = dropdown_offset(&self.autocomplete, kind, area);
                self.layout.fields.set_dropdown_offset(kind, offset);
            }
            self.layout.fields.set_dropdown(kind, area);
        }
    }
}

/// Bordered, labelled input; only the focused one shows a cursor
fn style_input(textarea: &mut tui_textarea::TextArea<'static>, label: &str, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", label))
            .border_style(Style::default().fg(border_color)),
    );
    let cursor_style = if focused {
        Style::default().bg(Color::White)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(cursor_style);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
