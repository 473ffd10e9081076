//! Handler for the row form: navigation, typing, sign selection.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_form_input(key_code: KeyCode, key_modifiers: KeyModifiers, app: &mut App) {
    match key_code {
        KeyCode::Tab => app.next_field(),
        KeyCode::BackTab => app.prev_field(),
        KeyCode::Up => app.row_up(),
        KeyCode::Down => app.row_down(),
        KeyCode::Left => app.cycle_sign(false),
        KeyCode::Right => app.cycle_sign(true),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => {
            if key_modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return;
            }
            app.input_char(c);
        }
        _ => {}
    }
}
