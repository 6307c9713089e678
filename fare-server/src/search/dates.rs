//! Date window expansion.
//!
//! Turns a base date plus a day range into the ordered list of calendar
//! dates to probe. Pure calendar-day arithmetic; no I/O.

use chrono::{Duration, NaiveDate};

/// Which side of the base date a window extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDirection {
    /// base−R … base+R
    Both,
    /// base … base+R
    After,
    /// base−R … base
    Before,
}

impl DateDirection {
    /// Parse the lowercase label used in search requests.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "both" => Some(DateDirection::Both),
            "after" => Some(DateDirection::After),
            "before" => Some(DateDirection::Before),
            _ => None,
        }
    }
}

/// A flexible-date window around a base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// Number of extra days on each requested side.
    pub days: u32,

    /// Which side(s) of the base date to extend.
    pub direction: DateDirection,
}

impl DateWindow {
    /// Create a new window.
    pub fn new(days: u32, direction: DateDirection) -> Self {
        Self { days, direction }
    }

    /// Expand a base date into the ordered, duplicate-free list of dates to
    /// probe.
    ///
    /// Whole calendar days are added or subtracted, so any time-of-day
    /// component upstream cannot shift the result. Dates that would fall
    /// outside chrono's representable range are skipped.
    pub fn expand(&self, base: NaiveDate) -> Vec<NaiveDate> {
        let days = self.days as i64;
        let (from, to) = match self.direction {
            DateDirection::Both => (-days, days),
            DateDirection::After => (0, days),
            DateDirection::Before => (-days, 0),
        };

        (from..=to)
            .filter_map(|offset| base.checked_add_signed(Duration::days(offset)))
            .collect()
    }
}
