//! Book results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::BookSearchState;
use crate::widgets::popup;

/// Render the results pane
pub fn render_results(state: &BookSearchState, frame: &mut Frame, area: Rect) {
    let title = match &state.page {
        Some(page) if page.total_pages > 0 => format!(
            " Books - page {}/{} ({} books) ",
            page.current_page + 1,
            page.total_pages,
            page.total_books
        ),
        _ => " Books ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let placeholder = if state.loading {
        Some("Searching...")
    } else if !state.has_searched() {
        Some("Press Enter to search")
    } else if state.page.as_ref().is_none_or(|p| p.books.is_empty()) {
        Some("No books found")
    } else {
        None
    };

    if let Some(text) = placeholder {
        let paragraph = Paragraph::new(Line::styled(
            text,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .page
        .iter()
        .flat_map(|page| page.books.iter())
        .map(|book| {
            let text = popup::truncate_to_width(
                &format!("{} - {}", book.title, book.author.name),
                width,
            );
            // Author part is dimmed when the title survived truncation intact
            let line = match text.strip_prefix(book.title.as_str()) {
                Some(rest) => Line::from(vec![
                    Span::styled(book.title.clone(), Style::default().fg(Color::White)),
                    Span::styled(rest.to_string(), Style::default().fg(Color::Gray)),
                ]),
                None => Line::styled(text, Style::default().fg(Color::White)),
            };
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
