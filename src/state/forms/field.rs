//! Text input value objects

/// A single text input of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a single-line text field
    pub fn text() -> Self {
        Self {
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create a multi-line text field
    pub fn multiline() -> Self {
        Self {
            value: String::new(),
            is_multiline: true,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the field blocks navigation; whitespace counts as content
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Insert a line break (multi-line fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Value to render, or the placeholder when empty
    pub fn display_value<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.value.is_empty() {
            placeholder
        } else {
            &self.value
        }
    }
}
