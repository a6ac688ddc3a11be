//! Wizard step rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::draw_field;
use crate::app::App;
use crate::state::{WizardStep, TOTAL_STEPS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Draw the wizard form for the current step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let error = wizard.error_message(app.state.t());
    let error_height = if error.is_some() { 3 } else { 0 };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(error_height),  // Error
            Constraint::Length(1),             // Progress
            Constraint::Length(1),             // Step indicator
            Constraint::Length(1),             // Step title
            Constraint::Min(3),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Navigation
        ])
        .margin(1)
        .split(inner);

    if let Some(error) = error {
        draw_error(frame, chunks[0], error);
    }
    draw_progress(frame, chunks[1], app);
    draw_step_indicator(frame, chunks[2], app);
    draw_step_title(frame, chunks[3], app);
    draw_step_content(frame, chunks[4], app);
    draw_navigation(frame, chunks[5], app);
}

fn draw_error(frame: &mut Frame, area: Rect, error: &str) {
    let paragraph = Paragraph::new(format!("⚠️ {error}"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.wizard.current_step().number();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(f64::from(step) / f64::from(TOTAL_STEPS))
        .label("");
    frame.render_widget(gauge, area);
}

fn draw_step_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let step = app.state.wizard.current_step().number();
    let indicator = Paragraph::new(format!("{} {} / {}", t.step, step, TOTAL_STEPS))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(indicator, area);
}

fn draw_step_title(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let title = match app.state.wizard.current_step() {
        WizardStep::Company => t.step1_title,
        WizardStep::Product => t.step2_title,
        WizardStep::Category => t.step3_title,
        WizardStep::Country => t.step4_title,
        WizardStep::Description => t.step5_title,
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(paragraph, area);
}

fn draw_step_content(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let form = app.state.wizard.form();

    match form.current_step {
        WizardStep::Company => {
            draw_field(frame, fixed_height(area, 3), &form.company_name, t.step1_placeholder)
        }
        WizardStep::Product => {
            draw_field(frame, fixed_height(area, 3), &form.product_name, t.step2_placeholder)
        }
        WizardStep::Description => {
            draw_field(frame, area, &form.product_description, t.step5_placeholder)
        }
        WizardStep::Category => draw_choices(frame, area, app, &form.product_category),
        WizardStep::Country => draw_choices(frame, area, app, &form.target_country),
    }
}

/// Top `height` rows of `area`
fn fixed_height(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}

/// Option list; the stored choice is marked, the cursor is highlighted
fn draw_choices(frame: &mut Frame, area: Rect, app: &App, selected_value: &str) {
    let items: Vec<ListItem> = app
        .current_options()
        .into_iter()
        .map(|option| {
            let is_selected = option.label == selected_value;
            let marker = if is_selected { "● " } else { "○ " };
            let style = if is_selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(option.label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(app.state.choice_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Previous button (hidden at step 1) and next/generate button
fn draw_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.state.t();
    let wizard = &app.state.wizard;
    let step = wizard.current_step();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(0),
            Constraint::Length(28),
        ])
        .split(area);

    if step.prev().is_some() {
        render_button(frame, chunks[0], t.prev_step, false, !wizard.is_loading());
    }

    if step.next().is_some() {
        render_button(frame, chunks[2], t.next_step, true, wizard.can_advance());
    } else if wizard.is_loading() {
        let frame_idx = app.tick % SPINNER.len();
        let label = format!("{} {}", SPINNER[frame_idx], t.generating);
        render_button(frame, chunks[2], &label, true, false);
    } else {
        render_button(frame, chunks[2], t.generate_doc, true, wizard.can_submit());
    }
}
