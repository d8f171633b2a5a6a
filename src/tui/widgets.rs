use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::availability::{AvailabilityIndex, TIME_SLOTS};
use crate::calendar::{is_past, DayCell, WEEKDAY_HEADERS};
use crate::config::ThemeConfig;
use crate::tui::reducer::SLOT_COLUMNS;
use crate::tui::state::{AppState, Pane, DEFAULT_STATUS_MESSAGE};

/// Width of one day cell including its trailing gap
const DAY_CELL_WIDTH: usize = 5;

/// Width of one slot cell like "[09:00 AM]" plus gap
const SLOT_CELL_WIDTH: usize = 13;

pub fn render_month_header(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.focus == Pane::Calendar;
    let base_style = if focused {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = state.booking.current_month.title();
    let line = Line::from(vec![
        Span::styled("  ◀ [  ", base_style),
        Span::styled(title, base_style.add_modifier(Modifier::BOLD)),
        Span::styled("  ] ▶", base_style),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::NONE));
    f.render_widget(header, area);
}

pub fn render_weekday_header(f: &mut Frame, area: Rect, focused: bool) {
    let base_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("  ", base_style)];
    for name in WEEKDAY_HEADERS {
        spans.push(Span::styled(format!("{:<width$}", name, width = DAY_CELL_WIDTH), base_style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

/// Render the 7-column day grid.
///
/// Past days are dimmed, the cursor is underlined, the selected day takes
/// the theme selection color, and fully-booked days carry a marker dot -
/// they stay selectable, the dot is only a warning.
pub fn render_day_grid(f: &mut Frame, area: Rect, state: &AppState, theme: &ThemeConfig) {
    let focused = state.ui.focus == Pane::Calendar;
    let grid = state.booking.current_month.grid();
    let today = state.system.today;
    let availability = &state.system.availability;

    let selection_fg = if focused {
        theme.selection_fg
    } else {
        theme.unfocused_selection_fg()
    };
    let base_style = if focused {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines: Vec<Line> = Vec::new();
    for week in grid.chunks(7) {
        let mut spans = vec![Span::styled("  ", base_style)];
        for (col, cell) in week.iter().enumerate() {
            let index = (lines.len() * 7) + col;
            spans.push(day_cell_span(
                *cell,
                index == state.ui.day_cursor && focused,
                state,
                today,
                availability,
                base_style,
                selection_fg,
                theme.booked_fg,
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

#[allow(clippy::too_many_arguments)]
fn day_cell_span<'a>(
    cell: DayCell,
    under_cursor: bool,
    state: &AppState,
    today: chrono::NaiveDate,
    availability: &AvailabilityIndex,
    base_style: Style,
    selection_fg: Color,
    booked_fg: Color,
) -> Span<'a> {
    let date = match cell {
        DayCell::Blank => {
            return Span::styled(" ".repeat(DAY_CELL_WIDTH), base_style);
        }
        DayCell::Day(date) => date,
    };

    let selected = state.booking.selected_date == Some(date);
    let past = is_past(date, today);
    let fully_booked = availability.is_fully_booked(date);

    let marker = if fully_booked && !past { "●" } else { " " };
    let text = format!("{:>2}{}  ", date.day(), marker);

    let mut style = base_style;
    if past {
        style = style.fg(Color::DarkGray);
    }
    if fully_booked && !past {
        style = style.fg(booked_fg);
    }
    if selected {
        style = Style::default().fg(selection_fg).add_modifier(Modifier::REVERSED);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    Span::styled(text, style)
}

/// Render the 3x3 slot grid for the selected date. Hidden until a date is
/// picked; booked slots are flagged and never selectable.
pub fn render_slot_grid(f: &mut Frame, area: Rect, state: &AppState, theme: &ThemeConfig) {
    let focused = state.ui.focus == Pane::Slots;
    let base_style = if focused {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let date = match state.booking.selected_date {
        Some(date) => date,
        None => {
            let hint = Paragraph::new("  Pick a day to see available times")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::NONE));
            f.render_widget(hint, area);
            return;
        }
    };

    let selection_fg = if focused {
        theme.selection_fg
    } else {
        theme.unfocused_selection_fg()
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("  Available times - {}", date.format("%Y-%m-%d")),
        base_style.add_modifier(Modifier::BOLD),
    ))];

    for (row, chunk) in TIME_SLOTS.chunks(SLOT_COLUMNS).enumerate() {
        let mut spans = vec![Span::styled("  ", base_style)];
        for (col, slot) in chunk.iter().enumerate() {
            let index = row * SLOT_COLUMNS + col;
            let booked = state.system.availability.is_booked(date, slot);
            let chosen = state.booking.selected_time.as_deref() == Some(*slot);
            let under_cursor = focused && index == state.ui.slot_cursor;

            let text = if booked {
                format!("({:^9})  ", slot)
            } else {
                format!("[{:^9}]  ", slot)
            };
            debug_assert_eq!(text.chars().count(), SLOT_CELL_WIDTH);

            let mut style = base_style;
            if booked {
                style = style.fg(theme.booked_fg);
            }
            if chosen {
                style = Style::default().fg(selection_fg).add_modifier(Modifier::REVERSED);
            }
            if under_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

/// Selection summary shown below the grids before confirmation.
pub fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let time_format = &state.system.config.time_format;
    let line = match (&state.booking.selected_date, &state.booking.selected_time) {
        (Some(date), Some(time)) => Line::from(vec![
            Span::raw("  Your selected time: "),
            Span::styled(
                format!("{} at {}", date.format(time_format), time),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   press b to book", Style::default().fg(Color::DarkGray)),
        ]),
        (Some(date), None) => Line::from(Span::raw(format!(
            "  Selected date: {}",
            date.format(time_format)
        ))),
        _ => Line::from(Span::styled(
            "  No selection yet",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

/// Full-area confirmation screen, replacing the grids once booked.
pub fn render_confirmation(f: &mut Frame, area: Rect, state: &AppState, theme: &ThemeConfig) {
    let time_format = &state.system.config.time_format;
    let (date_line, time_line) = match (&state.booking.selected_date, &state.booking.selected_time)
    {
        (Some(date), Some(time)) => (date.format(time_format).to_string(), time.clone()),
        // Confirmation is unreachable without both set
        _ => ("-".to_string(), "-".to_string()),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  ✓ You're all set!",
            Style::default()
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw("  Your strategy call is confirmed for:")),
        Line::from(""),
        Line::from(Span::styled(
            format!("    {}", date_line),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("    {}", time_line),
            Style::default()
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw("  Next steps:")),
        Line::from(Span::raw("    - Check your email for meeting details")),
        Line::from(Span::raw("    - Add the event to your calendar")),
        Line::from(Span::raw("    - Prepare your questions about AI automation")),
    ];

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

pub fn render_status_bar(f: &mut Frame, area: Rect, status_message: Option<&str>) {
    let status_text = status_message.unwrap_or(DEFAULT_STATUS_MESSAGE);

    // Fill the entire width for the reverse-video background
    let status_line = format!("{:<width$}", status_text, width = area.width as usize);
    let status_bar =
        Paragraph::new(status_line).style(Style::default().bg(Color::White).fg(Color::Black));

    f.render_widget(status_bar, area);
}
