//! Application state definitions

use super::ContactForm;
use std::collections::VecDeque;

/// Submission lifecycle for the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Short status-bar label
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Submitting => "Sending...",
            Self::Succeeded => "Sent",
            Self::Failed => "Failed",
        }
    }
}

/// Kind of blocking notice shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A blocking notice displayed as a modal dialog until dismissed
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The contact form values and focus
    pub form: ContactForm,
    /// Where the current (or last) submission stands
    pub submission_status: SubmissionStatus,
    /// Pending notices, shown front-first
    notices: VecDeque<Notice>,
}

impl AppState {
    /// Queue a success notice for display
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        });
    }

    /// Queue an error notice for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// The notice currently blocking input, if any
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Dismiss the currently shown notice
    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
