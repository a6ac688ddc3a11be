//! Layout components (header, hero, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub hero: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, hero, body and a one-line status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Hero
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        hero: chunks[1],
        body: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the header: product name, badge and the language toggle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let line = Line::from(vec![
        Span::styled(
            t.logo,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", t.badge), Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled("F2 ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.state.language.toggle_label(),
            Style::default().fg(Color::White),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the hero title and subtitle
pub fn draw_hero(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            t.hero_title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            t.hero_subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

/// Draw the status bar: feedback message if any, otherwise key hints and footer
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();

    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        )),
        None => {
            let hint = match app.state.current_view {
                View::Result => t.hint_result,
                View::Wizard => {
                    let step = app.state.wizard.current_step();
                    if step.is_choice() {
                        t.hint_choice_step
                    } else if step.next().is_none() {
                        t.hint_description_step
                    } else {
                        t.hint_text_step
                    }
                }
            };
            Line::from(vec![
                Span::styled(hint, Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::styled(t.footer, Style::default().fg(Color::DarkGray)),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
