//! Layout helpers and status bar

use crate::app::App;
use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main content area: the form sits centered at 80% width,
/// with the bottom line reserved for the status bar.
pub fn create_layout(area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(rows[0]);

    columns[1]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let status = app.state.submission_status;
    let indicator = match status {
        SubmissionStatus::Idle => Span::styled(" ● ", Style::default().fg(Color::DarkGray)),
        SubmissionStatus::Submitting => Span::styled(" ● ", Style::default().fg(Color::Yellow)),
        SubmissionStatus::Succeeded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionStatus::Failed => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };

    let spans = vec![
        indicator,
        Span::styled(status.label(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(get_hints(app), Style::default().fg(Color::DarkGray)),
    ];

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, status_area);

    let quit_hint = " ^C:quit ";

    // Quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the currently focused part of the form
fn get_hints(app: &App) -> String {
    let form = &app.state.form;
    if app.state.has_notices() {
        "Enter/Esc:dismiss".to_string()
    } else if form.is_submit_row_active() {
        "Enter:send  Tab:first field  Esc:quit".to_string()
    } else if form.is_active_field_select() {
        "←/→:choose  Tab:next  ^S:send  Esc:quit".to_string()
    } else if form.is_active_field_multiline() {
        "Enter:newline  Tab:next  ^S:send  Esc:quit".to_string()
    } else {
        "Tab:next  Shift+Tab:prev  ^S:send  Esc:quit".to_string()
    }
}
