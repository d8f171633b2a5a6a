use chrono::{Local, NaiveDate};

/// Source of "today" for past-day checks and the demo availability seed.
///
/// The widget compares dates at day granularity only; time of day never
/// participates. Injecting the clock keeps month navigation and past-day
/// behavior deterministic under test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
