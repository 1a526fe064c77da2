use crate::sections::Section;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Handle Normal mode key events
/// Returns Ok(true) if the application should quit, Ok(false) otherwise
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => app.show_help = false,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_section(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            app.navigate(Section::ALL[index].id());
        }
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Enter => match app.section {
            Section::Projects => app.projects.toggle_expanded(),
            Section::Contact => app.enter_contact_form(),
            _ => {}
        },
        KeyCode::Char('i') => app.enter_contact_form(),
        KeyCode::Char('o') if app.section == Section::Projects => {
            app.open_selected_project(false);
        }
        KeyCode::Char('O') if app.section == Section::Projects => {
            app.open_selected_project(true);
        }
        KeyCode::Char('y') => {
            app.copy_email();
        }
        KeyCode::Char('m') => {
            app.open_mail_client();
        }
        _ => {}
    }

    Ok(false)
}
