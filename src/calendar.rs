use chrono::{Datelike, NaiveDate};

/// A displayed calendar month, identified by (year, month).
///
/// Months are 1-based (chrono convention). All month/year pairs in that
/// range are valid; grid generation has no error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32, // 1..=12
}

/// One cell of the 7-column month grid: a leading placeholder before the
/// first day of the month, or a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Blank,
    Day(NaiveDate),
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(date) => Some(*date),
        }
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        CalendarMonth { year, month }
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Number of days in this month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of day 1 of this month (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday_offset(&self) -> u32 {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.weekday().num_days_from_sunday(),
            None => 0,
        }
    }

    /// Ordered grid cells: `first_weekday_offset` blanks, then one cell per
    /// day from 1 to `days_in_month`.
    pub fn grid(&self) -> Vec<DayCell> {
        let offset = self.first_weekday_offset();
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity((offset + days) as usize);
        for _ in 0..offset {
            cells.push(DayCell::Blank);
        }
        for day in 1..=days {
            // Day range comes from days_in_month, so construction cannot fail
            if let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) {
                cells.push(DayCell::Day(date));
            }
        }
        cells
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            CalendarMonth::new(self.year - 1, 12)
        } else {
            CalendarMonth::new(self.year, self.month - 1)
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            CalendarMonth::new(self.year + 1, 1)
        } else {
            CalendarMonth::new(self.year, self.month + 1)
        }
    }

    /// Heading like "September 2026".
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A date is "past" iff strictly earlier than today (day granularity).
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
