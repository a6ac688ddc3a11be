//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, title: &str, message: &str, hint: &str) {
    let hint = Line::from(Span::styled(
        hint.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    render_dialog(
        frame,
        DialogConfig {
            title,
            color: Color::Red,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
