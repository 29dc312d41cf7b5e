//! Contact form state and validation

use super::field::FormField;
use crate::submit::ContactPayload;

/// The fixed set of project categories offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    EventContentMarketing,
    CreativeDigitalMarketing,
    MarketingAnalytics,
    BrandStrategy,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::EventContentMarketing,
        ProjectType::CreativeDigitalMarketing,
        ProjectType::MarketingAnalytics,
        ProjectType::BrandStrategy,
        ProjectType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::EventContentMarketing => "Event & Content Marketing",
            Self::CreativeDigitalMarketing => "Creative Digital Marketing",
            Self::MarketingAnalytics => "Marketing Analytics",
            Self::BrandStrategy => "Brand Strategy & Development",
            Self::Other => "Other",
        }
    }

    /// Parse a category label back into its variant
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next option in display order, or `None` past the last one
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous option in display order, or `None` before the first one
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row, one past the last editable field
const SUBMIT_ROW: usize = 5;

/// The contact form: five fields plus the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub project_type: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("firstName", "First Name", false),
            last_name: FormField::text("lastName", "Last Name", false),
            email: FormField::text("email", "Email Address", false),
            project_type: FormField::select("projectType", "Project Type"),
            message: FormField::text("message", "Message", true),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    pub fn is_active_field_select(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_select())
    }

    /// Overwrite a single field by its wire name. No validation happens here;
    /// an unknown name is ignored and an unknown project-type label unsets
    /// the selection.
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "firstName" => self.first_name.set_text(value.to_string()),
            "lastName" => self.last_name.set_text(value.to_string()),
            "email" => self.email.set_text(value.to_string()),
            "projectType" => self
                .project_type
                .set_selection(ProjectType::from_label(value)),
            "message" => self.message.set_text(value.to_string()),
            _ => {}
        }
    }

    /// Labels of the required text fields that are still empty.
    ///
    /// Project type is marked required in the UI but is not checked here,
    /// matching the submit guard of the page this form replaces.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.is_empty() {
            missing.push("First Name");
        }
        if self.last_name.is_empty() {
            missing.push("Last Name");
        }
        if self.email.is_empty() {
            missing.push("Email Address");
        }
        if self.message.is_empty() {
            missing.push("Message");
        }
        missing
    }

    /// Snapshot the current values as the outbound wire payload
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            project_type: self.project_type.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Reset every field to empty and return focus to the first field
    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.project_type.clear();
        self.message.clear();
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // five fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.first_name,
            1 => &mut self.last_name,
            2 => &mut self.email,
            3 => &mut self.project_type,
            // For the submit row, return message as dummy (not used for input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.project_type),
            4 => Some(&self.message),
            // Index 5 is the submit row, no FormField for it
            _ => None,
        }
    }
}
