//! Application state and core logic

use crate::api::{ApiError, DocsApi};
use crate::export;
use crate::i18n::Language;
use crate::platform::has_shortcut_modifier;
use crate::state::{
    position_of, product_categories, target_countries, AppState, ChoiceOption, GeneratedDocument,
    SubmitOutcome, View, WizardStep,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Response of a spawned submission, tagged with the session that sent it
#[derive(Debug)]
pub struct SubmissionResult {
    pub session: Uuid,
    pub result: Result<GeneratedDocument, ApiError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client
    api: Arc<dyn DocsApi>,
    /// Directory the download action writes into
    download_dir: PathBuf,
    submissions_tx: UnboundedSender<SubmissionResult>,
    submissions_rx: UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
    /// Animation frame counter, advanced by the event loop
    pub tick: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn DocsApi>, language: Language, download_dir: PathBuf) -> Self {
        let (submissions_tx, submissions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(language),
            api,
            download_dir,
            submissions_tx,
            submissions_rx,
            quit: false,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Options shown on the current choice step, in the active language
    pub fn current_options(&self) -> Vec<ChoiceOption> {
        let t = self.state.t();
        match self.state.wizard.current_step() {
            WizardStep::Category => product_categories(t),
            WizardStep::Country => target_countries(t),
            _ => Vec::new(),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let toggle_language = key.code == KeyCode::F(2)
            || (key.code == KeyCode::Char('l') && has_shortcut_modifier(key.modifiers));
        if toggle_language {
            self.state.toggle_language();
            return Ok(());
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key),
            View::Result => self.handle_result_key(key),
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        let step = self.state.wizard.current_step();
        if step.is_choice() {
            return self.handle_choice_key(key);
        }

        match key.code {
            KeyCode::Esc => self.retreat(),
            KeyCode::Char('s') if has_shortcut_modifier(key.modifiers) => {
                if step == WizardStep::Description {
                    self.submit();
                }
            }
            KeyCode::Enter | KeyCode::Tab if step != WizardStep::Description => self.advance(),
            KeyCode::Enter => self.state.wizard.input_newline(),
            KeyCode::Backspace => self.state.wizard.backspace(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                self.state.wizard.input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_choice_key(&mut self, key: KeyEvent) -> Result<()> {
        let options = self.current_options();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor_down(options.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(option) = options.get(self.state.choice_cursor) {
                    self.select_option(option.label);
                }
            }
            KeyCode::Right | KeyCode::Tab => self.advance(),
            KeyCode::Left | KeyCode::Esc | KeyCode::Backspace => self.retreat(),
            _ => {}
        }
        Ok(())
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') => self.copy_document(),
            KeyCode::Char('d') => self.download_document(),
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            _ => {}
        }
        Ok(())
    }

    fn advance(&mut self) {
        if self.state.wizard.advance() {
            self.enter_step();
        }
    }

    fn retreat(&mut self) {
        if self.state.wizard.retreat() {
            self.enter_step();
        }
    }

    /// Select on category/country steps; both auto-advance
    fn select_option(&mut self, label: &str) {
        let selected = match self.state.wizard.current_step() {
            WizardStep::Category => self.state.wizard.select_category(label),
            WizardStep::Country => self.state.wizard.select_country(label),
            _ => false,
        };
        if selected {
            self.enter_step();
        }
    }

    /// Place the choice cursor on the stored value when a step is (re)entered
    fn enter_step(&mut self) {
        let form = self.state.wizard.form();
        let stored = match form.current_step {
            WizardStep::Category => form.product_category.clone(),
            WizardStep::Country => form.target_country.clone(),
            _ => String::new(),
        };
        self.state.choice_cursor = position_of(&self.current_options(), &stored).unwrap_or(0);
    }

    /// Start a submission in the background if the form allows it
    pub fn submit(&mut self) {
        let Some(pending) = self.state.wizard.begin_submit(self.state.language) else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.submissions_tx.clone();
        tokio::spawn(async move {
            let result = api.generate_document(&pending.request).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(SubmissionResult {
                session: pending.session,
                result,
            });
        });
    }

    /// Apply any submission results that arrived since the last tick
    pub fn poll_submissions(&mut self) {
        while let Ok(submission) = self.submissions_rx.try_recv() {
            self.apply_submission(submission);
        }
    }

    fn apply_submission(&mut self, submission: SubmissionResult) {
        let outcome = self
            .state
            .wizard
            .finish_submit(submission.session, submission.result);

        if outcome == SubmitOutcome::Completed {
            self.state.current_view = View::Result;
            self.state.scroll_offset = 0;
            self.state.status_message = None;
        }
    }

    /// Copy the document text to the system clipboard
    pub fn copy_document(&mut self) {
        let Some(content) = self
            .state
            .wizard
            .document()
            .map(|d| d.document_content.clone())
        else {
            return;
        };

        match copy_to_clipboard(&content) {
            Ok(()) => {
                tracing::info!(chars = content.chars().count(), "Document copied");
                self.state.status_message = Some(self.state.t().copied.to_string());
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.push_error(format!("{e}"));
            }
        }
    }

    /// Save the document text to the download directory
    pub fn download_document(&mut self) {
        let Some(content) = self
            .state
            .wizard
            .document()
            .map(|d| d.document_content.clone())
        else {
            return;
        };
        let t = self.state.t();
        let product_name = self.state.wizard.form().product_name.as_text().to_string();

        match export::save_document(&self.download_dir, &product_name, t.download_suffix, &content)
        {
            Ok(path) => {
                self.state.status_message = Some(format!("{}{}", t.downloaded_to, path.display()));
            }
            Err(e) => {
                tracing::warn!("Download failed: {e}");
                self.push_error(e.to_string());
            }
        }
    }

    /// Drop the document and start a fresh wizard session
    pub fn regenerate(&mut self) {
        self.state.wizard.reset();
        tracing::debug!(session = %self.state.wizard.session(), "Started new wizard session");
        self.state.current_view = View::Wizard;
        self.state.choice_cursor = 0;
        self.state.scroll_offset = 0;
        self.state.status_message = None;
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
