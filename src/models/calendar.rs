//! Date range and resolved calendar types
//!
//! A `DateRange` is the raw user input (one or two calendar dates). The
//! `ResolvedCalendar` is the final list of billable days after range
//! expansion and exclusion filtering; it can only be built by the resolver
//! in `services::calendar`, which guarantees its ordering invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw user-supplied date selection, before resolution
///
/// Validity (`end >= start`) is checked by the resolver so that the error
/// surfaces through the normal taxonomy rather than at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the period
    pub start: NaiveDate,

    /// Last day of the period, inclusive
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from a start/end pair
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Create a one-day range (start == end)
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start.format("%d/%m/%Y"))
        } else {
            write!(
                f,
                "{} a {}",
                self.start.format("%d/%m/%Y"),
                self.end.format("%d/%m/%Y")
            )
        }
    }
}

/// The billable days of a quote: strictly ascending, deduplicated, all
/// within the originating range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCalendar {
    dates: Vec<NaiveDate>,
}

impl ResolvedCalendar {
    /// Build a calendar from already-filtered dates
    ///
    /// Callers outside the resolver cannot construct one, so the ascending
    /// no-duplicate invariant holds crate-wide.
    pub(crate) fn from_dates(dates: Vec<NaiveDate>) -> Self {
        debug_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        Self { dates }
    }

    /// The billable days, ascending
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of billable days ("Dias Selecionados")
    pub fn day_count(&self) -> u32 {
        self.dates.len() as u32
    }

    /// Check whether a date is billable
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single(d(2025, 3, 10));
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 14));
        assert_eq!(range.to_string(), "10/03/2025 a 14/03/2025");

        let single = DateRange::single(d(2025, 3, 10));
        assert_eq!(single.to_string(), "10/03/2025");
    }

    #[test]
    fn test_calendar_accessors() {
        let calendar =
            ResolvedCalendar::from_dates(vec![d(2025, 3, 10), d(2025, 3, 11), d(2025, 3, 13)]);
        assert_eq!(calendar.day_count(), 3);
        assert!(calendar.contains(d(2025, 3, 11)));
        assert!(!calendar.contains(d(2025, 3, 12)));
    }
}
