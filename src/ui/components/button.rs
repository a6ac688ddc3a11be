//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; disabled buttons are dimmed
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_primary: bool, is_enabled: bool) {
    let color = match (is_enabled, is_primary) {
        (false, _) => Color::DarkGray,
        (true, true) => Color::Cyan,
        (true, false) => Color::White,
    };

    let mut text_style = Style::default().fg(color);
    if is_enabled && is_primary {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(format!(" {label} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(paragraph.block(block), area);
}

/// Render a button labelled with its shortcut key
pub fn render_key_button(frame: &mut Frame, area: Rect, key: &str, label: &str, is_primary: bool) {
    let content = format!("[{key}] {label}");
    render_button(frame, area, &content, is_primary, true);
}
