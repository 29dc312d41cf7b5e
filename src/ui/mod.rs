//! UI module for rendering the TUI

mod contact;
mod field_renderer;
mod layout;

pub mod components;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);
    contact::draw(frame, content_area, app);
    layout::draw_status_bar(frame, app);

    // Blocking notices render on top of everything else
    if let Some(notice) = app.state.current_notice() {
        components::dialog::render_notice_dialog(frame, notice);
    }
}
