use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::warn;

use crate::config::BookedEntry;

/// The nine fixed hourly slots offered on every date.
pub const TIME_SLOTS: [&str; 9] = [
    "09:00 AM", "10:00 AM", "11:00 AM",
    "12:00 PM", "01:00 PM", "02:00 PM",
    "03:00 PM", "04:00 PM", "05:00 PM",
];

/// Read-only index of already-booked slots per date.
///
/// Built once from configuration at startup and never mutated afterwards:
/// confirming a booking only transitions widget state, it does not insert
/// into this index. A date with no entry has every slot free.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    booked: HashMap<NaiveDate, HashSet<String>>,
}

impl AvailabilityIndex {
    /// Build from `[[booked]]` config entries. Entries with unparseable
    /// dates and slot labels outside the fixed slot list are skipped.
    pub fn from_entries(entries: &[BookedEntry]) -> Self {
        let mut booked: HashMap<NaiveDate, HashSet<String>> = HashMap::new();
        for entry in entries {
            let date = match NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    warn!("Ignoring booked entry with invalid date '{}': {}", entry.date, e);
                    continue;
                }
            };
            let set = booked.entry(date).or_default();
            for slot in &entry.slots {
                if TIME_SLOTS.contains(&slot.as_str()) {
                    set.insert(slot.clone());
                } else {
                    warn!("Ignoring unknown time slot '{}' for {}", slot, entry.date);
                }
            }
        }
        AvailabilityIndex { booked }
    }

    /// Demo seed used when no availability is configured: today has
    /// 10:00 AM and 01:00 PM already taken.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut booked = HashMap::new();
        let slots: HashSet<String> = ["10:00 AM", "01:00 PM"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        booked.insert(today, slots);
        AvailabilityIndex { booked }
    }

    pub fn is_booked(&self, date: NaiveDate, slot: &str) -> bool {
        self.booked
            .get(&date)
            .map(|set| set.contains(slot))
            .unwrap_or(false)
    }

    /// True iff every slot in the fixed slot list is booked for this date.
    pub fn is_fully_booked(&self, date: NaiveDate) -> bool {
        self.booked
            .get(&date)
            .map(|set| set.len() == TIME_SLOTS.len())
            .unwrap_or(false)
    }

    pub fn free_slots(&self, date: NaiveDate) -> Vec<&'static str> {
        TIME_SLOTS
            .iter()
            .filter(|slot| !self.is_booked(date, slot))
            .copied()
            .collect()
    }

    /// Dates that carry at least one booked slot, sorted.
    pub fn booked_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.booked.keys().copied().collect();
        dates.sort();
        dates
    }
}

/// Index/display key for a date: `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unseeded_date_has_everything_free() {
        let index = AvailabilityIndex::default();
        let d = date(2026, 9, 10);
        for slot in TIME_SLOTS {
            assert!(!index.is_booked(d, slot));
        }
        assert!(!index.is_fully_booked(d));
        assert_eq!(index.free_slots(d).len(), TIME_SLOTS.len());
    }

    #[test]
    fn test_seeded_today_blocks_two_slots() {
        let today = date(2026, 8, 30);
        let index = AvailabilityIndex::seeded(today);

        assert!(index.is_booked(today, "10:00 AM"));
        assert!(index.is_booked(today, "01:00 PM"));
        assert!(!index.is_booked(today, "11:00 AM"));
        assert!(!index.is_fully_booked(today));
        assert_eq!(index.free_slots(today).len(), 7);
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![BookedEntry {
            date: "2026-09-01".to_string(),
            slots: vec!["09:00 AM".to_string(), "05:00 PM".to_string()],
        }];
        let index = AvailabilityIndex::from_entries(&entries);
        let d = date(2026, 9, 1);

        assert!(index.is_booked(d, "09:00 AM"));
        assert!(index.is_booked(d, "05:00 PM"));
        assert!(!index.is_booked(d, "12:00 PM"));
        assert_eq!(index.booked_dates(), vec![d]);
    }

    #[test]
    fn test_from_entries_skips_invalid() {
        let entries = vec![
            BookedEntry {
                date: "not-a-date".to_string(),
                slots: vec!["09:00 AM".to_string()],
            },
            BookedEntry {
                date: "2026-09-01".to_string(),
                slots: vec!["08:00 AM".to_string()], // outside the slot list
            },
        ];
        let index = AvailabilityIndex::from_entries(&entries);
        assert!(!index.is_booked(date(2026, 9, 1), "08:00 AM"));
        assert_eq!(index.free_slots(date(2026, 9, 1)).len(), TIME_SLOTS.len());
    }

    #[test]
    fn test_fully_booked_requires_all_nine_slots() {
        let d = date(2026, 9, 2);
        let all_but_one: Vec<String> = TIME_SLOTS[..8].iter().map(|s| s.to_string()).collect();
        let index = AvailabilityIndex::from_entries(&[BookedEntry {
            date: "2026-09-02".to_string(),
            slots: all_but_one,
        }]);
        assert!(!index.is_fully_booked(d));

        let all: Vec<String> = TIME_SLOTS.iter().map(|s| s.to_string()).collect();
        let index = AvailabilityIndex::from_entries(&[BookedEntry {
            date: "2026-09-02".to_string(),
            slots: all,
        }]);
        assert!(index.is_fully_booked(d));
        for slot in TIME_SLOTS {
            assert!(index.is_booked(d, slot));
        }
        assert!(index.free_slots(d).is_empty());
    }

    #[test]
    fn test_date_key_format() {
        assert_eq!(date_key(date(2026, 9, 5)), "2026-09-05");
        assert_eq!(date_key(date(2026, 12, 31)), "2026-12-31");
    }
}
