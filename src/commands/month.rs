use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::availability::AvailabilityIndex;
use crate::calendar::{is_past, CalendarMonth, DayCell, WEEKDAY_HEADERS};

/// Render a month grid as plain text. Past days are parenthesized, fully
/// booked days carry a `*` marker, today is bracketed.
pub fn format_month(
    month: CalendarMonth,
    availability: &AvailabilityIndex,
    today: NaiveDate,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", month.title()));
    output.push_str(&format!("{}\n", "═".repeat(34)));
    for name in WEEKDAY_HEADERS {
        output.push_str(&format!("{:>4} ", name));
    }
    output.push('\n');

    let grid = month.grid();
    for (i, cell) in grid.iter().enumerate() {
        let text = match cell {
            DayCell::Blank => "    ".to_string(),
            DayCell::Day(date) => {
                let day = date.day();
                if *date == today {
                    format!("[{:>2}]", day)
                } else if is_past(*date, today) {
                    format!("({:>2})", day)
                } else if availability.is_fully_booked(*date) {
                    format!("{:>3}*", day)
                } else {
                    format!("{:>3} ", day)
                }
            }
        };
        output.push_str(&text);
        output.push(' ');
        if (i + 1) % 7 == 0 {
            output.push('\n');
        }
    }
    if grid.len() % 7 != 0 {
        output.push('\n');
    }

    output.push_str("\n[today]  (past)  *fully booked\n");
    output
}

pub fn run(month: CalendarMonth, availability: &AvailabilityIndex, today: NaiveDate) -> Result<()> {
    print!("{}", format_month(month, availability, today));
    Ok(())
}
