//! Form field value objects

use super::form_state::ProjectType;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select(Option<ProjectType>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub required: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            required: true,
        }
    }

    /// Create a new project-type select field
    pub fn select(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select(None),
            is_multiline: false,
            required: true,
        }
    }

    /// Get the text value (the selected option's label for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select(choice) => choice.map(ProjectType::label).unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the selected option
    pub fn set_selection(&mut self, choice: Option<ProjectType>) {
        self.value = FieldValue::Select(choice);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Advance a select field to the next option, wrapping through "no selection"
    pub fn next_option(&mut self) {
        if let FieldValue::Select(choice) = &mut self.value {
            *choice = match choice {
                None => Some(ProjectType::ALL[0]),
                Some(current) => current.next(),
            };
        }
    }

    /// Move a select field to the previous option, wrapping through "no selection"
    pub fn prev_option(&mut self) {
        if let FieldValue::Select(choice) = &mut self.value {
            *choice = match choice {
                None => Some(ProjectType::ALL[ProjectType::ALL.len() - 1]),
                Some(current) => current.prev(),
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select(choice) => *choice = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select(choice) => choice
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select(_))
    }
}
