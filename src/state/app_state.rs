//! Application state definitions

use super::wizard::WizardController;
use crate::i18n::{tr, Language, Translations};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Five-step data entry
    #[default]
    Wizard,
    /// Generated document display
    Result,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub language: Language,
    pub wizard: WizardController,

    /// Highlighted option on the category/country steps
    pub choice_cursor: usize,
    /// Vertical scroll of the result view
    pub scroll_offset: u16,
    /// Largest useful `scroll_offset`, measured against the current terminal size
    pub scroll_limit: u16,

    /// Errors waiting to be shown in the modal dialog, oldest first
    pub error_queue: VecDeque<String>,
    /// One-line feedback in the status bar (copied, saved, ...)
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// String table of the active language
    pub fn t(&self) -> &'static Translations {
        tr(self.language)
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Move choice cursor down
    pub fn move_cursor_down(&mut self, max: usize) {
        if max > 0 && self.choice_cursor < max - 1 {
            self.choice_cursor += 1;
        }
    }

    /// Move choice cursor up
    pub fn move_cursor_up(&mut self) {
        self.choice_cursor = self.choice_cursor.saturating_sub(1);
    }

    /// Update the scroll bound; the offset is pulled back if it now overshoots
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll_offset = self.scroll_offset.min(limit);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.scroll_limit);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10).min(self.scroll_limit);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }
}
