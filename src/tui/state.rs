use std::sync::Arc;

use chrono::NaiveDate;

use crate::availability::AvailabilityIndex;
use crate::calendar::CalendarMonth;
use crate::config::Config;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer; the render pass only reads.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The booking selection itself (date, time, confirmation)
    pub booking: BookingState,

    /// Cursor and focus state for the widget panes
    pub ui: UiState,

    /// Config, availability, and status line
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, availability: AvailabilityIndex, today: NaiveDate) -> Self {
        AppState {
            booking: BookingState::new(today),
            ui: UiState::default(),
            system: SystemState::new(config, availability, today),
        }
    }
}

/// The user's current selection. Owned exclusively by the widget; nothing
/// persists — state dies with the process.
#[derive(Debug, Clone)]
pub struct BookingState {
    /// The month being displayed
    pub current_month: CalendarMonth,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    pub confirmed: bool,
}

/// Phase of the booking flow, derived from which fields are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Browsing,
    DateSelected,
    DateAndTimeSelected,
    Confirmed,
}

impl BookingState {
    pub fn new(today: NaiveDate) -> Self {
        BookingState {
            current_month: CalendarMonth::containing(today),
            selected_date: None,
            selected_time: None,
            confirmed: false,
        }
    }

    pub fn phase(&self) -> BookingPhase {
        if self.confirmed {
            BookingPhase::Confirmed
        } else if self.selected_date.is_some() && self.selected_time.is_some() {
            BookingPhase::DateAndTimeSelected
        } else if self.selected_date.is_some() {
            BookingPhase::DateSelected
        } else {
            BookingPhase::Browsing
        }
    }
}

/// Which pane the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Calendar,
    Slots,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Pane,
    /// Index into the current month's grid (blanks included)
    pub day_cursor: usize,
    /// Index into TIME_SLOTS
    pub slot_cursor: usize,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→↑↓ move | [ ] month | Tab times | Enter select | b book | q quit";

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    /// Read-only after startup; confirming a booking never writes back
    pub availability: Arc<AvailabilityIndex>,
    /// Refreshed from the clock each loop iteration
    pub today: NaiveDate,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn new(config: Config, availability: AvailabilityIndex, today: NaiveDate) -> Self {
        SystemState {
            config,
            availability: Arc::new(availability),
            today,
            status_message: None,
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking() -> BookingState {
        BookingState::new(date(2026, 8, 30))
    }

    #[test]
    fn test_initial_state_browses_current_month() {
        let state = booking();
        assert_eq!(state.current_month, CalendarMonth::new(2026, 8));
        assert_eq!(state.phase(), BookingPhase::Browsing);
        assert!(state.selected_date.is_none());
        assert!(state.selected_time.is_none());
        assert!(!state.confirmed);
    }

    #[test]
    fn test_phase_date_selected() {
        let mut state = booking();
        state.selected_date = Some(date(2026, 9, 1));
        assert_eq!(state.phase(), BookingPhase::DateSelected);
    }

    #[test]
    fn test_phase_date_and_time_selected() {
        let mut state = booking();
        state.selected_date = Some(date(2026, 9, 1));
        state.selected_time = Some("11:00 AM".to_string());
        assert_eq!(state.phase(), BookingPhase::DateAndTimeSelected);
    }

    #[test]
    fn test_phase_confirmed_wins() {
        let mut state = booking();
        state.selected_date = Some(date(2026, 9, 1));
        state.selected_time = Some("11:00 AM".to_string());
        state.confirmed = true;
        assert_eq!(state.phase(), BookingPhase::Confirmed);
    }

    #[test]
    fn test_set_status_message() {
        let mut system =
            SystemState::new(Config::default(), AvailabilityIndex::default(), date(2026, 8, 30));
        system.set_status_message("Slot unavailable".to_string());
        assert_eq!(system.status_message, Some("Slot unavailable".to_string()));

        system.reset_status_message();
        assert_eq!(system.status_message, Some(DEFAULT_STATUS_MESSAGE.to_string()));
    }
}
