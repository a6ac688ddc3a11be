//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a text field, showing the placeholder while it is empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, placeholder: &str) {
    let value_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if field.is_empty() {
        vec![Line::from(vec![
            cursor.clone(),
            Span::styled(field.display_value(placeholder), value_style),
        ])]
    } else {
        // split('\n') keeps a trailing empty line so the cursor follows a fresh newline
        field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect()
    };
    if !field.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
