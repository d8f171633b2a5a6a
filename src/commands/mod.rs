pub mod month;
pub mod slots;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::calendar::CalendarMonth;

/// Parse an optional YYYY-MM-DD date, defaulting to today.
pub fn parse_date(date: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
    if let Some(date_str) = date {
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    } else {
        Ok(today)
    }
}

/// Parse an optional YYYY-MM month, defaulting to the current month.
pub fn parse_month(month: Option<String>, today: NaiveDate) -> Result<CalendarMonth> {
    if let Some(month_str) = month {
        let (year, month) = month_str
            .split_once('-')
            .context("Invalid month format. Use YYYY-MM")?;
        let year: i32 = year
            .parse()
            .with_context(|| format!("Invalid year '{}'", year))?;
        let month: u32 = month
            .parse()
            .with_context(|| format!("Invalid month '{}'", month))?;
        if !(1..=12).contains(&month) {
            anyhow::bail!("Month out of range: {}", month);
        }
        Ok(CalendarMonth::new(year, month))
    } else {
        Ok(CalendarMonth::new(today.year(), today.month()))
    }
}
