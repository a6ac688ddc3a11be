//! Generated document rendering
//!
//! Read-only view of a `GeneratedDocument`. The copy/download/regenerate
//! buttons only mirror the keys handled in `App`; nothing here mutates state.

use super::components::{render_key_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::i18n::Translations;
use crate::state::GeneratedDocument;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the result view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(document) = app.state.wizard.document() else {
        return;
    };
    let t = app.state.t();
    let (body_area, actions_area) = split(area);

    let lines = document_lines(document, t, app.state.wizard.generated_at());
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0))
        .block(document_block(t));
    frame.render_widget(body, body_area);

    draw_actions(frame, actions_area, t);
}

/// Document body on top, action buttons below
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

fn document_block(t: &Translations) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", t.result_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Highest scroll offset that still shows content when drawn into `area`
pub fn scroll_limit(
    document: &GeneratedDocument,
    t: &Translations,
    generated_at: Option<DateTime<Local>>,
    area: Rect,
) -> u16 {
    let (body_area, _) = split(area);
    let inner = document_block(t).inner(body_area);
    let rows = Paragraph::new(document_lines(document, t, generated_at))
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    let overflow = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

fn draw_actions(frame: &mut Frame, area: Rect, t: &Translations) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_key_button(frame, chunks[0], "c", t.copy_doc, true);
    render_key_button(frame, chunks[1], "d", t.download_doc, true);
    render_key_button(frame, chunks[2], "r", t.regenerate, false);
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label_value<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(or_dash(value)),
    ])
}

/// Backend strings may be blank; show a dash instead of nothing
fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// All lines of the document view, top to bottom
pub fn document_lines<'a>(
    document: &'a GeneratedDocument,
    t: &'a Translations,
    generated_at: Option<DateTime<Local>>,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    if let Some(at) = generated_at {
        lines.push(Line::from(Span::styled(
            format!("{}{}", t.generated_at, at.format("%Y-%m-%d %H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.extend(
        document
            .document_content
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));

    lines.push(heading(t.required_certs));
    lines.extend(
        document
            .required_certs
            .iter()
            .map(|cert| Line::from(format!("  • {cert}"))),
    );
    lines.push(Line::from(""));

    lines.push(heading(t.compliance_checklist));
    for item in &document.compliance_items {
        let mut spans = vec![Span::styled(
            format!("  {}", item.name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if item.required {
            spans.push(Span::styled(
                format!(" [{}]", t.required),
                Style::default().fg(Color::Red),
            ));
        }
        spans.push(Span::styled(
            format!(" ({})", or_dash(&item.status)),
            Style::default().fg(Color::Magenta),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(format!("    {}", item.description)));
    }
    lines.push(Line::from(""));

    lines.push(heading(t.estimate_info));
    lines.push(label_value(t.estimated_time, &document.estimated_time));
    lines.push(label_value(t.estimated_cost, &document.estimated_cost));
    lines.push(Line::from(""));

    let regulation = &document.regulation_details;
    lines.push(heading(t.regulation_details));
    lines.push(label_value(t.country, &regulation.country_name));
    lines.push(Line::from(Span::styled(
        t.main_regulations,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        regulation
            .main_regulations
            .iter()
            .map(|reg| Line::from(format!("  • {reg}"))),
    );
    lines.push(label_value(
        t.customs_requirements,
        &regulation.customs_requirements,
    ));
    lines.push(label_value(
        t.import_restrictions,
        &regulation.import_restrictions,
    ));
    lines.push(Line::from(""));

    lines.push(heading(t.recommended_steps));
    lines.extend(
        document
            .recommended_steps
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("  {}. {step}", i + 1))),
    );

    lines
}
