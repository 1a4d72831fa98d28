use chrono::{Datelike, NaiveDate};

/// Month the season starts in. A season runs from September 1 through August 31.
pub const SEASON_START_MONTH: u32 = 9;

/// A season, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The season `today` falls in.
    pub fn current(today: NaiveDate) -> Self {
        if today.month() >= SEASON_START_MONTH {
            Self::new(today.year())
        } else {
            Self::new(today.year() - 1)
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (date.year() == self.start_year && date.month() >= SEASON_START_MONTH)
            || (date.year() == self.start_year + 1 && date.month() < SEASON_START_MONTH)
    }

    /// `"2026-2027"`
    pub fn label(&self) -> String {
        format!("{}-{}", self.start_year, self.start_year + 1)
    }

    pub fn previous(&self) -> Self {
        Self::new(self.start_year - 1)
    }

    pub fn next(&self) -> Self {
        Self::new(self.start_year + 1)
    }
}
