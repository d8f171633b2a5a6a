/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. Once the booking is
/// confirmed only quitting remains actionable; everything else about
/// no-op enforcement lives in the reducer.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::action::Action;
use super::state::AppState;

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Global keys first
    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    // Terminal state: the confirmation screen only responds to quit
    if state.booking.confirmed {
        debug!("KEY: {:?} ignored - booking confirmed", key.code);
        return None;
    }

    match key.code {
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::PageUp | KeyCode::Char('[') => Some(Action::MonthPrev),
        KeyCode::PageDown | KeyCode::Char(']') => Some(Action::MonthNext),
        KeyCode::Tab => Some(Action::TogglePane),
        KeyCode::Enter => Some(activate(state)),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Action::Confirm),
        _ => None,
    }
}

/// Handle keys that work regardless of booking state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Enter selects whatever the focused pane's cursor is on
fn activate(state: &AppState) -> Action {
    match state.ui.focus {
        super::state::Pane::Calendar => Action::SelectDay,
        super::state::Pane::Slots => Action::SelectSlot,
    }
}
