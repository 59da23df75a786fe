//! Keyboard input mapping
//!
//! Turns crossterm key events into surface actions. Screens with a text
//! entry take printable keys as text; the rest use the single-key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions the surface understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move focus up (arrow up, k)
    Up,
    /// Move focus down (arrow down, j)
    Down,
    /// Move focus left (arrow left, h)
    Left,
    /// Move focus right (arrow right, l)
    Right,
    /// Next control (Tab)
    Next,
    /// Previous control (Shift+Tab)
    Previous,
    /// Activate the focused control (Enter, Space)
    Select,
    /// Cancel out of the screen (Esc)
    Back,
    /// Quit application (q, Ctrl+C)
    Quit,
    /// Character typed into the text entry
    Char(char),
    /// Remove the last character of the text entry (Backspace)
    Delete,
    /// No action
    None,
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent, text_entry: bool) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Up => InputAction::Up,
        KeyCode::Down => InputAction::Down,
        KeyCode::Left => InputAction::Left,
        KeyCode::Right => InputAction::Right,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputAction::Previous,
        KeyCode::Tab => InputAction::Next,
        KeyCode::BackTab => InputAction::Previous,
        KeyCode::Enter => InputAction::Select,
        KeyCode::Esc => InputAction::Back,

        KeyCode::Backspace if text_entry => InputAction::Delete,
        KeyCode::Char(c) if text_entry => InputAction::Char(c),

        KeyCode::Char(' ') => InputAction::Select,
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Char('k') => InputAction::Up,
        KeyCode::Char('j') => InputAction::Down,
        KeyCode::Char('h') => InputAction::Left,
        KeyCode::Char('l') => InputAction::Right,
        KeyCode::Backspace => InputAction::Back,

        _ => InputAction::None,
    }
}
