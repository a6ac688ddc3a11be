//! Export Doc TUI - terminal wizard for generating export compliance documents
//!
//! Collects company, product, category, target market and description,
//! then asks the document service to draft the export paperwork.

mod api;
mod app;
mod config;
mod export;
mod i18n;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use api::ApiClient;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exportdoc_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load()?;
    let client = ApiClient::new(config.base_url(), config.request_timeout())?;
    tracing::info!(base_url = client.base_url(), "Using document service");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client), config.language(), config.download_dir());
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up finished generation requests before drawing
        app.poll_submissions();

        let loading = app.state.wizard.is_loading();
        if loading {
            app.tick = app.tick.wrapping_add(1);
        }

        // Re-measured every frame: resizes and language toggles change wrapping
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        let limit = ui::result_scroll_limit(app, screen);
        app.state.set_scroll_limit(limit);

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling keeps the spinner moving while a request is in flight
        let poll_duration = if loading {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
