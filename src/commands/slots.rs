use anyhow::Result;
use chrono::NaiveDate;

use crate::availability::{date_key, AvailabilityIndex, TIME_SLOTS};

/// List every slot for a date with its booked/free status.
pub fn format_slots(date: NaiveDate, availability: &AvailabilityIndex) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nTime slots - {}\n", date_key(date)));
    output.push_str(&format!("{}\n", "═".repeat(34)));

    for slot in TIME_SLOTS {
        let status = if availability.is_booked(date, slot) {
            "unavailable"
        } else {
            "free"
        };
        output.push_str(&format!("  {:<10} {}\n", slot, status));
    }

    if availability.is_fully_booked(date) {
        output.push_str("\nThis date is fully booked.\n");
    } else {
        let free = availability.free_slots(date).len();
        output.push_str(&format!("\n{} of {} slots free.\n", free, TIME_SLOTS.len()));
    }
    output
}

pub fn run(date: NaiveDate, availability: &AvailabilityIndex) -> Result<()> {
    print!("{}", format_slots(date, availability));
    Ok(())
}
