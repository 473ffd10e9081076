//! Event handlers for the TUI: keyboard.

mod form;

use crossterm::event::{KeyEvent, KeyEventKind};

use super::app::App;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

fn handle_shortcut(shortcut: Shortcut, app: &mut App) -> HandleResult {
    match shortcut {
        Shortcut::Plot => {
            app.plot();
        }
        Shortcut::AddRow => app.add_row(),
        Shortcut::RemoveRow => app.remove_row(),
        Shortcut::Copy => app.copy_command(),
        Shortcut::NextPreset => app.next_preset(),
        Shortcut::Quit => return HandleResult::Break,
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        return handle_shortcut(shortcut, app);
    }

    form::handle_form_input(key.code, key.modifiers, app);
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::RenderOptions;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> HandleResult {
        handle_key(
            KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                state: KeyEventState::empty(),
            },
            app,
        )
    }

    #[test]
    fn keys_drive_the_form() {
        let mut app = App::new(RenderOptions::default());
        press(&mut app, KeyCode::Char('3'), KeyModifiers::empty());
        press(&mut app, KeyCode::Tab, KeyModifiers::empty());
        press(&mut app, KeyCode::Tab, KeyModifiers::empty());
        press(&mut app, KeyCode::Tab, KeyModifiers::empty());
        press(&mut app, KeyCode::Right, KeyModifiers::empty());
        press(&mut app, KeyCode::Tab, KeyModifiers::empty());
        press(&mut app, KeyCode::Char('6'), KeyModifiers::empty());
        assert_eq!(
            press(&mut app, KeyCode::Enter, KeyModifiers::empty()),
            HandleResult::Continue
        );
        assert_eq!(
            app.last_command.as_deref(),
            Some("Polyhedron(ieqs = [[6,3,0,0],]).plot()")
        );
    }

    #[test]
    fn ctrl_n_and_ctrl_d_manage_rows() {
        let mut app = App::new(RenderOptions::default());
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.rows.len(), 2);
        press(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(app.rows.len(), 1);
    }

    #[test]
    fn esc_quits() {
        let mut app = App::new(RenderOptions::default());
        assert_eq!(
            press(&mut app, KeyCode::Esc, KeyModifiers::empty()),
            HandleResult::Break
        );
    }
}
