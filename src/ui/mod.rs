//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result;
mod wizard;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, app);
    layout::draw_hero(frame, screen.hero, app);

    match app.state.current_view {
        View::Wizard => wizard::draw(frame, screen.body, app),
        View::Result => result::draw(frame, screen.body, app),
    }

    layout::draw_status_bar(frame, screen.status_bar, app);

    // Modal errors draw last so they sit on top
    if let Some(error) = app.state.current_error() {
        let t = app.state.t();
        render_error_dialog(frame, t.error_title, error, t.hint_dismiss);
    }
}

/// Scroll bound of the result view for a screen of the given size
pub fn result_scroll_limit(app: &App, screen: Rect) -> u16 {
    let Some(document) = app.state.wizard.document() else {
        return 0;
    };
    let body = layout::create_layout(screen).body;
    result::scroll_limit(
        document,
        app.state.t(),
        app.state.wizard.generated_at(),
        body,
    )
}
