//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::Form;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact Us ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First / last name
            Constraint::Length(3),             // Email / project type
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    // Paired rows, matching the two-column layout of the original page
    let name_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);
    let detail_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_field(frame, name_row[0], &form.first_name, form.active_field() == 0);
    draw_field(frame, name_row[1], &form.last_name, form.active_field() == 1);
    draw_field(frame, detail_row[0], &form.email, form.active_field() == 2);
    draw_field(
        frame,
        detail_row[1],
        &form.project_type,
        form.active_field() == 3,
    );
    draw_field(frame, chunks[2], &form.message, form.active_field() == 4);

    draw_submit_button(frame, chunks[3], app);
}

/// Draw the centered submit button row
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(area);

    let submitting = app.state.submission_status.is_submitting();
    let label = if submitting { "Sending..." } else { "Submit" };

    render_button(
        frame,
        columns[1],
        label,
        app.state.form.is_submit_row_active(),
        !submitting,
    );

    if submitting {
        // Make the in-flight state visible next to the button as well
        let indicator = Paragraph::new("●")
            .alignment(Alignment::Left)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        if columns[2].width > 2 {
            let dot_area = Rect {
                x: columns[2].x + 1,
                y: columns[2].y + 1,
                width: 1,
                height: 1,
            };
            frame.render_widget(indicator, dot_area);
        }
    }
}
