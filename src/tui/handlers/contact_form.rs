use crate::model::FormField;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// Handle ContactForm mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_contact_form(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                app.submit_contact();
            }
            KeyCode::Char('c') => return Ok(true),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => {
            if !app.cancel_submission() {
                app.leave_contact_form();
            }
        }
        KeyCode::Tab | KeyCode::Down => app.contact.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact.focus_prev(),
        KeyCode::Enter => {
            if app.contact.focus() == FormField::Message {
                app.submit_contact();
            } else {
                app.contact.focus_next();
            }
        }
        KeyCode::Backspace => {
            app.contact.pop_char();
        }
        KeyCode::Char(c) => {
            app.contact.push_char(c);
        }
        _ => {}
    }

    Ok(false)
}
