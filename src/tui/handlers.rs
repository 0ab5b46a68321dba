// File: src/tui/handlers.rs
// Handles keyboard input for the TUI.
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE: u16 = 10;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Enter if !state.input_buffer.trim().is_empty() => {
            return Some(Action::Submit(state.take_input()));
        }
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        KeyCode::PageUp => state.scroll_up(PAGE),
        KeyCode::PageDown => state.scroll_down(PAGE),
        _ => {}
    }
    None
}
