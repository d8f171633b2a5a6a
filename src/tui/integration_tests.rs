//! End-to-end flows through the key mapping and reducer, without a
//! terminal: synthesize key events, map them to actions, fold them through
//! `reduce`, and assert on the resulting booking state.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::availability::AvailabilityIndex;
use crate::config::{BookedEntry, Config};

use super::action::Action;
use super::keys::key_to_action;
use super::reducer::reduce;
use super::state::{AppState, BookingPhase, Pane};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Fixed "today": Sunday 2026-08-30
fn today() -> NaiveDate {
    date(2026, 8, 30)
}

fn app() -> AppState {
    AppState::new(Config::default(), AvailabilityIndex::seeded(today()), today())
}

/// Press a key and fold the resulting action (if any) into the state
fn press(state: AppState, code: KeyCode) -> AppState {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match key_to_action(key, &state) {
        Some(action) => reduce(state, action),
        None => state,
    }
}

fn press_sequence(mut state: AppState, codes: &[KeyCode]) -> AppState {
    for code in codes {
        state = press(state, *code);
    }
    state
}

#[test]
fn test_full_happy_path_via_keys() {
    // August 2026 starts on Saturday: cursor 0 sits on a blank cell.
    // Walk to the 31st (the last cell), pick it, pick the first free slot,
    // and book.
    let mut state = app();
    state.ui.day_cursor = 36; // Aug 31, a Monday

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.booking.phase(), BookingPhase::DateSelected);
    assert_eq!(state.booking.selected_date, Some(date(2026, 8, 31)));
    assert_eq!(state.ui.focus, Pane::Slots);

    let state = press(state, KeyCode::Enter); // 09:00 AM, free on the 31st
    assert_eq!(state.booking.phase(), BookingPhase::DateAndTimeSelected);
    assert_eq!(state.booking.selected_time.as_deref(), Some("09:00 AM"));

    let state = press(state, KeyCode::Char('b'));
    assert_eq!(state.booking.phase(), BookingPhase::Confirmed);

    // Summary reflects exactly the chosen strings
    assert_eq!(state.booking.selected_date, Some(date(2026, 8, 31)));
    assert_eq!(state.booking.selected_time.as_deref(), Some("09:00 AM"));
}

#[test]
fn test_booked_seed_slot_rejected_then_free_slot_accepted() {
    // Select today (cell 36 is the 31st; today the 30th is cell 35)
    let mut state = app();
    state.ui.day_cursor = 35;
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.booking.selected_date, Some(today()));

    // Slot cursor starts at 09:00 AM; move right to 10:00 AM (seeded booked)
    let state = press_sequence(state, &[KeyCode::Right, KeyCode::Enter]);
    assert!(state.booking.selected_time.is_none());

    // 11:00 AM is free
    let state = press_sequence(state, &[KeyCode::Right, KeyCode::Enter]);
    assert_eq!(state.booking.selected_time.as_deref(), Some("11:00 AM"));
}

#[test]
fn test_past_day_click_changes_nothing() {
    let mut state = app();
    state.ui.day_cursor = 34; // Aug 29, yesterday
    let state = press(state, KeyCode::Enter);
    assert!(state.booking.selected_date.is_none());
    assert_eq!(state.booking.phase(), BookingPhase::Browsing);
}

#[test]
fn test_premature_book_key_is_ignored() {
    let state = press(app(), KeyCode::Char('b'));
    assert_eq!(state.booking.phase(), BookingPhase::Browsing);

    let mut state = state;
    state.ui.day_cursor = 36;
    let state = press(state, KeyCode::Enter);
    let state = press(state, KeyCode::Char('b'));
    assert_eq!(state.booking.phase(), BookingPhase::DateSelected);
}

#[test]
fn test_month_navigation_keeps_selection_and_returns() {
    let mut state = app();
    state.ui.day_cursor = 36;
    let state = press(state, KeyCode::Enter);

    // Page through months in both directions
    let state = press_sequence(
        state,
        &[KeyCode::Char(']'), KeyCode::Char(']'), KeyCode::Char('['), KeyCode::Char('[')],
    );
    assert_eq!(state.booking.current_month.title(), "August 2026");
    assert_eq!(state.booking.selected_date, Some(date(2026, 8, 31)));
}

#[test]
fn test_repicking_date_after_time_forces_time_repick() {
    let mut state = app();
    state.ui.day_cursor = 36;
    let state = press_sequence(state, &[KeyCode::Enter, KeyCode::Enter]);
    assert!(state.booking.selected_time.is_some());

    // Tab back to the calendar, move to today, select it
    let mut state = press(state, KeyCode::Tab);
    assert_eq!(state.ui.focus, Pane::Calendar);
    state.ui.day_cursor = 35;
    let state = press(state, KeyCode::Enter);

    assert_eq!(state.booking.selected_date, Some(today()));
    assert!(state.booking.selected_time.is_none());
}

#[test]
fn test_confirmation_screen_only_quits() {
    let mut state = app();
    state.ui.day_cursor = 36;
    let state = press_sequence(state, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Char('b')]);
    assert!(state.booking.confirmed);

    // Nothing moves anymore
    let before_month = state.booking.current_month;
    let state = press_sequence(
        state,
        &[KeyCode::Char(']'), KeyCode::Enter, KeyCode::Char('b'), KeyCode::Down],
    );
    assert_eq!(state.booking.current_month, before_month);
    assert!(state.booking.confirmed);

    // Quit still maps
    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert_eq!(key_to_action(key, &state), Some(Action::Quit));
}

#[test]
fn test_fully_booked_day_is_still_selectable() {
    let all_slots: Vec<String> = crate::availability::TIME_SLOTS
        .iter()
        .map(|s| s.to_string())
        .collect();
    let availability = AvailabilityIndex::from_entries(&[BookedEntry {
        date: "2026-08-31".to_string(),
        slots: all_slots,
    }]);
    let mut state = AppState::new(Config::default(), availability, today());
    assert!(state.system.availability.is_fully_booked(date(2026, 8, 31)));

    // The fully-booked flag is a visual warning, not a selection guard
    state.ui.day_cursor = 36;
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.booking.selected_date, Some(date(2026, 8, 31)));

    // But every individual slot on it is blocked
    let state = press(state, KeyCode::Enter);
    assert!(state.booking.selected_time.is_none());
}
