//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action        | Keys                      |
//! |---------------|---------------------------|
//! | Plot          | Enter                     |
//! | Next field    | Tab                       |
//! | Prev field    | Shift+Tab                 |
//! | Row up/down   | ↑ ↓                       |
//! | Sign          | Space ← → (or < > =)      |
//! | Add row       | Ctrl+N                    |
//! | Remove row    | Ctrl+D                    |
//! | Copy command  | Ctrl+Y                    |
//! | Next preset   | Ctrl+P                    |
//! | Quit          | Esc, Ctrl+C               |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Generate the command (Enter)
    Plot,
    /// Append a blank row (Ctrl+N)
    AddRow,
    /// Remove the focused row (Ctrl+D)
    RemoveRow,
    /// Copy the command to the clipboard (Ctrl+Y)
    Copy,
    /// Load the next built-in preset (Ctrl+P)
    NextPreset,
    /// Quit (Esc, Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Shortcut::Quit),
            KeyCode::Char('n') if ctrl => Some(Shortcut::AddRow),
            KeyCode::Char('d') if ctrl => Some(Shortcut::RemoveRow),
            KeyCode::Char('y') if ctrl => Some(Shortcut::Copy),
            KeyCode::Char('p') if ctrl => Some(Shortcut::NextPreset),
            KeyCode::Esc => Some(Shortcut::Quit),
            KeyCode::Enter => Some(Shortcut::Plot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Esc, KeyModifiers::empty())),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_row_management() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Shortcut::AddRow)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Shortcut::RemoveRow)
        );
    }

    #[test]
    fn match_plot_enter() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Enter, KeyModifiers::empty())),
            Some(Shortcut::Plot)
        );
    }

    #[test]
    fn plain_chars_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn match_key_release_ignored() {
        let key_release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&key_release), None);
    }
}

/// Labels for the bottom bar (2 lines for readability on narrow terminals).
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar() -> Text<'static> {
        Text::from(vec![
            Line::from(vec![
                Span::styled("Tab/Shift+Tab ", DIM),
                Span::raw("field"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("row"),
                Span::styled("  Space ←→ ", DIM),
                Span::raw("sign"),
                Span::styled("  Enter ", DIM),
                Span::raw("plot"),
            ]),
            Line::from(vec![
                Span::styled("Ctrl+N ", DIM),
                Span::raw("add row"),
                Span::styled("  Ctrl+D ", DIM),
                Span::raw("remove row"),
                Span::styled("  Ctrl+Y ", DIM),
                Span::raw("copy"),
                Span::styled("  Ctrl+P ", DIM),
                Span::raw("preset"),
                Span::styled("  Esc ", DIM),
                Span::raw("quit"),
            ]),
        ])
    }
}
