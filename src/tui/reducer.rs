use tracing::debug;

use crate::availability::TIME_SLOTS;
use crate::calendar::{is_past, DayCell};

use super::action::Action;
use super::state::{AppState, Pane};

/// Slot grid is laid out 3 wide, matching the nine fixed slots.
pub const SLOT_COLUMNS: usize = 3;

/// Day grid is 7 columns (Sun..Sat).
const DAY_COLUMNS: usize = 7;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state. No side effects,
/// no I/O, no clock reads (today is carried in `state.system.today`).
/// Every invalid user action leaves the state unchanged.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;
    match action {
        // Month navigation works in any phase and never resets the
        // selection; a selected date from another month stays selected.
        Action::MonthPrev => {
            state.booking.current_month = state.booking.current_month.prev();
            clamp_day_cursor(&mut state);
        }
        Action::MonthNext => {
            state.booking.current_month = state.booking.current_month.next();
            clamp_day_cursor(&mut state);
        }

        Action::CursorLeft => move_cursor(&mut state, -1),
        Action::CursorRight => move_cursor(&mut state, 1),
        Action::CursorUp => move_cursor_vertical(&mut state, -1),
        Action::CursorDown => move_cursor_vertical(&mut state, 1),

        Action::TogglePane => match state.ui.focus {
            Pane::Calendar => {
                if state.booking.selected_date.is_some() {
                    state.ui.focus = Pane::Slots;
                } else {
                    debug!("REDUCE: Tab ignored - no date selected yet");
                }
            }
            Pane::Slots => state.ui.focus = Pane::Calendar,
        },

        Action::SelectDay => select_day(&mut state),
        Action::SelectSlot => select_slot(&mut state),
        Action::Confirm => confirm(&mut state),

        Action::Quit => {}
    }
    state
}

fn grid_len(state: &AppState) -> usize {
    state.booking.current_month.grid().len()
}

fn clamp_day_cursor(state: &mut AppState) {
    let len = grid_len(state);
    if state.ui.day_cursor >= len {
        state.ui.day_cursor = len.saturating_sub(1);
    }
}

fn move_cursor(state: &mut AppState, delta: isize) {
    match state.ui.focus {
        Pane::Calendar => {
            let len = grid_len(state) as isize;
            let next = state.ui.day_cursor as isize + delta;
            state.ui.day_cursor = next.clamp(0, len - 1) as usize;
        }
        Pane::Slots => {
            let next = state.ui.slot_cursor as isize + delta;
            state.ui.slot_cursor = next.clamp(0, TIME_SLOTS.len() as isize - 1) as usize;
        }
    }
}

fn move_cursor_vertical(state: &mut AppState, direction: isize) {
    let step = match state.ui.focus {
        Pane::Calendar => DAY_COLUMNS as isize,
        Pane::Slots => SLOT_COLUMNS as isize,
    };
    move_cursor(state, direction * step);
}

/// Select the day under the cursor. Blank cells and past days are ignored;
/// a fully-booked day is still selectable (the marker is a warning, not a
/// guard - only individual slots are blocked at the time step).
fn select_day(state: &mut AppState) {
    if state.booking.confirmed {
        return;
    }
    let grid = state.booking.current_month.grid();
    let date = match grid.get(state.ui.day_cursor) {
        Some(DayCell::Day(date)) => *date,
        _ => {
            debug!("REDUCE: SelectDay on blank cell - ignoring");
            return;
        }
    };
    if is_past(date, state.system.today) {
        debug!("REDUCE: SelectDay on past date {} - ignoring", date);
        return;
    }

    // Changing date always forces a re-pick of the time
    state.booking.selected_date = Some(date);
    state.booking.selected_time = None;
    state.ui.slot_cursor = 0;
    state.ui.focus = Pane::Slots;
}

/// Select the slot under the cursor for the selected date. Booked slots
/// are rejected silently; without a selected date this does nothing.
fn select_slot(state: &mut AppState) {
    if state.booking.confirmed {
        return;
    }
    let date = match state.booking.selected_date {
        Some(date) => date,
        None => {
            debug!("REDUCE: SelectSlot without a selected date - ignoring");
            return;
        }
    };
    let slot = TIME_SLOTS[state.ui.slot_cursor.min(TIME_SLOTS.len() - 1)];
    if state.system.availability.is_booked(date, slot) {
        debug!("REDUCE: SelectSlot on booked slot {} {} - ignoring", date, slot);
        return;
    }
    state.booking.selected_time = Some(slot.to_string());
}

/// Confirm the booking. Only reachable with both date and time selected;
/// the confirmed state is terminal for the session. The availability index
/// is deliberately NOT updated (it has no write API).
fn confirm(state: &mut AppState) {
    if state.booking.confirmed {
        return;
    }
    let (date, time) = match (&state.booking.selected_date, &state.booking.selected_time) {
        (Some(date), Some(time)) => (*date, time.clone()),
        _ => {
            debug!("REDUCE: Confirm without date and time - ignoring");
            return;
        }
    };
    state.booking.confirmed = true;
    state
        .system
        .set_status_message(format!("Booked {} at {} - press q to exit", date, time));
}
