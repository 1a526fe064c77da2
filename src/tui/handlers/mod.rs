mod contact_form;
mod normal_mode;

pub use contact_form::handle_contact_form;
pub use normal_mode::handle_normal_mode;

use crate::tui::app::{App, InputMode};
use crossterm::event::KeyEvent;
use std::io;

/// Dispatch a key press to the handler for the current mode
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::ContactForm => handle_contact_form(app, key),
    }
}
