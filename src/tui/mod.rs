// Module declarations
pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::{AppState, BookingPhase, BookingState, Pane};

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::availability::AvailabilityIndex;
use crate::clock::Clock;
use crate::config::Config;

/// Main entry point for TUI mode
pub fn run(config: Config, availability: AvailabilityIndex, clock: &dyn Clock) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(config, availability, clock.today());
    app_state.system.reset_status_message();

    // Main loop
    loop {
        // Re-read the clock so past-day shading stays correct across
        // a midnight rollover while the widget is open
        app_state.system.today = clock.today();

        terminal.draw(|f| draw(f, &app_state))?;

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let action = key_to_action(key, &app_state);

                let should_quit = matches!(action, Some(Action::Quit));

                if let Some(act) = action {
                    tracing::debug!("ACTION: dispatching {:?}", act);
                    app_state = reduce(app_state, act);
                }

                if should_quit {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Layout: month header, weekday row, day grid, slot grid, summary, status
/// bar. Once confirmed the whole content area becomes the confirmation
/// screen, like the source widget swapping in its confirmation view.
fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let theme = state.system.config.theme.clone();

    if state.booking.confirmed {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        widgets::render_confirmation(f, chunks[0], state, &theme);
        widgets::render_status_bar(f, chunks[1], state.system.status_message.as_deref());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // month header
            Constraint::Length(1), // weekday header
            Constraint::Length(6), // day grid (up to 6 week rows)
            Constraint::Length(5), // slot grid
            Constraint::Length(2), // summary
            Constraint::Min(0),    // filler
            Constraint::Length(1), // status bar
        ])
        .split(area);

    widgets::render_month_header(f, chunks[0], state);
    widgets::render_weekday_header(f, chunks[1], state.ui.focus == Pane::Calendar);
    widgets::render_day_grid(f, chunks[2], state, &theme);
    widgets::render_slot_grid(f, chunks[3], state, &theme);
    widgets::render_summary(f, chunks[4], state);
    widgets::render_status_bar(f, chunks[6], state.system.status_message.as_deref());
}
