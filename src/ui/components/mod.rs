//! Reusable UI components

mod button;
pub mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
