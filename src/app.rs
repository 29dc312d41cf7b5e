//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{AppState, Form, SubmissionStatus};
use crate::submit::{FormsparkClient, SubmitClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used to deliver submissions
    submitter: Box<dyn SubmitClient>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the configured endpoint
    pub fn new() -> Result<Self> {
        let config = FormConfig::load()?;
        let submitter = FormsparkClient::new(config.endpoint_url());
        Ok(Self::with_client(Box::new(submitter)))
    }

    /// Create an App with an explicit submission client
    pub fn with_client(submitter: Box<dyn SubmitClient>) -> Self {
        Self {
            state: AppState::default(),
            submitter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle notice dismissal first (modal)
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc => {
                self.quit = true;
            }
            // Submit shortcut from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if self.state.form.is_active_field_select() => {
                self.state.form.get_active_field_mut().prev_option();
            }
            KeyCode::Right if self.state.form.is_active_field_select() => {
                self.state.form.get_active_field_mut().next_option();
            }
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit().await;
                } else if self.state.form.is_active_field_multiline() {
                    self.state.form.get_active_field_mut().push_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) => {
                if !self.state.form.is_submit_row_active() {
                    self.state.form.get_active_field_mut().push_char(c);
                }
            }
            KeyCode::Backspace => {
                if !self.state.form.is_submit_row_active() {
                    self.state.form.get_active_field_mut().pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run one submission attempt for the current form contents.
    ///
    /// Validates required fields before any network activity, then issues a
    /// single POST. On success the form is cleared; on any failure the field
    /// values are kept so the user can retry. The status never stays
    /// `Submitting` once the request has resolved.
    pub async fn submit(&mut self) {
        // One request at a time
        if self.state.submission_status.is_submitting() {
            return;
        }

        let missing = self.state.form.missing_required();
        if !missing.is_empty() {
            tracing::warn!("Submission blocked, empty fields: {}", missing.join(", "));
            self.state.push_error("Please fill all the fields.");
            return;
        }

        self.state.submission_status = SubmissionStatus::Submitting;
        let payload = self.state.form.payload();

        match self.submitter.submit(&payload).await {
            Ok(()) => {
                self.state.submission_status = SubmissionStatus::Succeeded;
                self.state.form.clear();
                self.state.push_success("Message Sent!");
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err:?}");
                self.state.submission_status = SubmissionStatus::Failed;
                self.state.push_error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;
    use crate::submit::{ContactPayload, MockSubmitClient, SubmitError};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn filled_app(mock: MockSubmitClient) -> App {
        let mut app = App::with_client(Box::new(mock));
        app.state.form.set_field("firstName", "Ada");
        app.state.form.set_field("lastName", "Lovelace");
        app.state.form.set_field("email", "ada@example.com");
        app.state
            .form
            .set_field("projectType", "Brand Strategy & Development");
        app.state.form.set_field("message", "Hello");
        app
    }

    fn ada_payload() -> ContactPayload {
        ContactPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            project_type: "Brand Strategy & Development".to_string(),
            message: "Hello".to_string(),
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_required_field_issues_no_request() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit().times(0);

            let mut app = filled_app(mock);
            app.state.form.set_field("lastName", "");
            app.submit().await;

            // Fields untouched, validation notice queued, nothing in flight
            assert_eq!(app.state.form.first_name.as_text(), "Ada");
            assert_eq!(app.state.form.last_name.as_text(), "");
            assert_eq!(app.state.form.email.as_text(), "ada@example.com");
            assert_eq!(app.state.form.message.as_text(), "Hello");
            assert_eq!(app.state.submission_status, SubmissionStatus::Idle);

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "Please fill all the fields.");
        }

        #[tokio::test]
        async fn test_valid_form_posts_exact_payload_once_and_clears() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit()
                .with(eq(ada_payload()))
                .times(1)
                .returning(|_| Ok(()));

            let mut app = filled_app(mock);
            app.submit().await;

            assert_eq!(app.state.submission_status, SubmissionStatus::Succeeded);
            assert!(app.state.form.first_name.is_empty());
            assert!(app.state.form.last_name.is_empty());
            assert!(app.state.form.email.is_empty());
            assert!(app.state.form.project_type.is_empty());
            assert!(app.state.form.message.is_empty());

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Success);
            assert_eq!(notice.message, "Message Sent!");
        }

        #[tokio::test]
        async fn test_rejected_response_keeps_fields_for_retry() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Status(500)));

            let mut app = filled_app(mock);
            app.submit().await;

            assert_eq!(app.state.submission_status, SubmissionStatus::Failed);
            assert_eq!(app.state.form.payload(), ada_payload());

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "Failed to send message. Please try again.");
        }

        #[tokio::test]
        async fn test_transport_error_is_handled_like_a_rejection() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit().times(1).returning(|_| {
                Err(SubmitError::Transport("connection refused".to_string()))
            });

            let mut app = filled_app(mock);
            app.submit().await;

            assert_eq!(app.state.submission_status, SubmissionStatus::Failed);
            assert_eq!(app.state.form.payload(), ada_payload());

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "Error sending message. Please try again.");
        }

        #[tokio::test]
        async fn test_status_never_stays_submitting() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = filled_app(mock);
            app.submit().await;
            assert!(!app.state.submission_status.is_submitting());

            let mut mock = MockSubmitClient::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Status(422)));
            let mut app = filled_app(mock);
            app.submit().await;
            assert!(!app.state.submission_status.is_submitting());
        }

        #[tokio::test]
        async fn test_no_request_while_one_is_in_flight() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit().times(0);

            let mut app = filled_app(mock);
            app.state.submission_status = SubmissionStatus::Submitting;
            app.submit().await;

            assert_eq!(app.state.submission_status, SubmissionStatus::Submitting);
            assert!(!app.state.has_notices());
        }

        #[tokio::test]
        async fn test_retry_after_failure_succeeds() {
            let mut mock = MockSubmitClient::new();
            let mut failed_once = false;
            mock.expect_submit().times(2).returning(move |_| {
                if failed_once {
                    Ok(())
                } else {
                    failed_once = true;
                    Err(SubmitError::Status(503))
                }
            });

            let mut app = filled_app(mock);
            app.submit().await;
            assert_eq!(app.state.submission_status, SubmissionStatus::Failed);
            app.state.dismiss_notice();

            // Fields were preserved, so the retry carries the same payload
            app.submit().await;
            assert_eq!(app.state.submission_status, SubmissionStatus::Succeeded);
        }
    }

    mod key_handling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            for c in "Ada".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.state.form.first_name.as_text(), "Ada");
        }

        #[tokio::test]
        async fn test_tab_moves_focus_and_typing_follows() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('L'))).await.unwrap();
            assert_eq!(app.state.form.last_name.as_text(), "L");
            assert_eq!(app.state.form.first_name.as_text(), "");
        }

        #[tokio::test]
        async fn test_arrows_cycle_project_type() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            app.state.form.set_active_field(3);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(
                app.state.form.project_type.as_text(),
                "Event & Content Marketing"
            );
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert!(app.state.form.project_type.is_empty());
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_triggers_submission() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));

            let mut app = filled_app(mock);
            while !app.state.form.is_submit_row_active() {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.submission_status, SubmissionStatus::Succeeded);
        }

        #[tokio::test]
        async fn test_enter_in_message_inserts_newline() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            app.state.form.set_active_field(4);
            app.handle_key(key(KeyCode::Char('h'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            assert_eq!(app.state.form.message.as_text(), "h\ni");
        }

        #[tokio::test]
        async fn test_typing_on_submit_row_does_not_edit_fields() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            app.state.form.prev_field();
            assert!(app.state.form.is_submit_row_active());
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert!(app.state.form.message.is_empty());
        }

        #[tokio::test]
        async fn test_notice_blocks_input_until_dismissed() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            app.state.push_error("Please fill all the fields.");

            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.first_name.as_text(), "");
            assert!(app.state.has_notices());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_notices());

            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.first_name.as_text(), "x");
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = App::with_client(Box::new(MockSubmitClient::new()));
            assert!(!app.should_quit());
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_ctrl_s_submits_from_any_field() {
            let mut mock = MockSubmitClient::new();
            mock.expect_submit()
                .with(eq(ada_payload()))
                .times(1)
                .returning(|_| Ok(()));

            let mut app = filled_app(mock);
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert_eq!(app.state.submission_status, SubmissionStatus::Succeeded);
        }
    }
}
