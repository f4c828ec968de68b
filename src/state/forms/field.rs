//! Form field value objects

/// Represents a single form field with its configuration, value and error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    /// Message shown under the field, set by validation or by the server
    pub error: Option<String>,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline: false,
            error: None,
        }
    }

    /// Create a new multiline text field
    pub fn textarea(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear value and error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Whether the field currently carries an error
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the display value for rendering (placeholder when empty)
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
