//! Dialog components

mod base;
mod notice_dialog;

pub use notice_dialog::render_notice_dialog;
