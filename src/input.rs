//! Keyboard mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic commands produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Action, // Space or Up arrow: jump, or restart after a crash
    Quit,   // Esc, q, Ctrl-C: close the display
    Other,
}

pub fn map_key(key: KeyEvent) -> AppInput {
    // Windows reports releases too; only presses count
    if key.kind != KeyEventKind::Press {
        return AppInput::Other;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => AppInput::Action,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppInput::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
        _ => AppInput::Other,
    }
}
