//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title and border color
    pub color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let inner_width = config.max_width.saturating_sub(4).max(1);
    let message_rows = wrapped_row_count(config.message, inner_width);
    let hint_rows = if config.hint.is_some() { 2 } else { 0 }; // blank + hint

    // title + blank + message + hint + borders
    let height = (2 + message_rows + hint_rows + 2).max(5);
    let dialog_area = centered_rect(area, config.max_width, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.message.lines().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(dialog, dialog_area);
}

/// Rect of the given size centered in `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows a message needs at `width` columns; 3+ byte chars are treated as double width
fn wrapped_row_count(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = message
        .split('\n')
        .map(|line| {
            let cols: usize = line
                .chars()
                .map(|c| if c.len_utf8() >= 3 { 2 } else { 1 })
                .sum();
            cols.div_ceil(width).max(1)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, Rect::new(10, 7, 60, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(2, 2, 20, 5);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, Rect::new(2, 2, 20, 5));
    }

    #[test]
    fn test_wrapped_row_count() {
        assert_eq!(wrapped_row_count("", 10), 1);
        assert_eq!(wrapped_row_count("abcdefghij", 10), 1);
        assert_eq!(wrapped_row_count("abcdefghijk", 10), 2);
        assert_eq!(wrapped_row_count("a\nb\nc", 10), 3);
        assert_eq!(wrapped_row_count("网络错误网络错误", 10), 2);
    }
}
