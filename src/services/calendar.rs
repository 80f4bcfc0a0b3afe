//! Date-range resolution
//!
//! Normalizes a raw `DateRange` into the ordered list of billable days:
//! every date from start to end inclusive, minus weekends when requested,
//! minus explicitly excluded days. Fully deterministic; no clock access.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{PadocaError, PadocaResult};
use crate::models::{DateRange, ResolvedCalendar};

/// Check whether a date falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Enumerate the days a shell may offer for manual exclusion: the full
/// range, weekend-filtered when requested
///
/// Manual exclusions are drawn from this set; excluding a day that was
/// never offered has no effect on resolution.
///
/// # Errors
///
/// Returns `InvalidRange` when the range ends before it starts.
pub fn offered_days(range: &DateRange, exclude_weekends: bool) -> PadocaResult<Vec<NaiveDate>> {
    if range.end < range.start {
        return Err(PadocaError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let days = range
        .start
        .iter_days()
        .take_while(|d| *d <= range.end)
        .filter(|d| !exclude_weekends || !is_weekend(*d))
        .collect();

    Ok(days)
}

/// Resolve a raw date range into the final billable calendar
///
/// # Errors
///
/// - `InvalidRange` when the range ends before it starts.
/// - `EmptyCalendar` when no day survives the exclusions; the caller must
///   block computation on this condition.
pub fn resolve(
    range: &DateRange,
    exclude_weekends: bool,
    manual_exclusions: &[NaiveDate],
) -> PadocaResult<ResolvedCalendar> {
    let dates: Vec<NaiveDate> = offered_days(range, exclude_weekends)?
        .into_iter()
        .filter(|d| !manual_exclusions.contains(d))
        .collect();

    if dates.is_empty() {
        return Err(PadocaError::EmptyCalendar);
    }

    Ok(ResolvedCalendar::from_dates(dates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_inclusive_day_count() {
        // 2025-03-10 is a Monday
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 14));
        let calendar = resolve(&range, false, &[]).unwrap();
        assert_eq!(calendar.day_count(), 5);
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single(d(2025, 3, 10));
        let calendar = resolve(&range, false, &[]).unwrap();
        assert_eq!(calendar.day_count(), 1);
        assert_eq!(calendar.dates(), &[d(2025, 3, 10)]);
    }

    #[test]
    fn test_end_before_start() {
        let range = DateRange::new(d(2025, 3, 14), d(2025, 3, 10));
        let err = resolve(&range, false, &[]).unwrap_err();
        assert!(matches!(err, PadocaError::InvalidRange { .. }));
    }

    #[test]
    fn test_weekend_exclusion() {
        // Monday 2025-03-10 through Sunday 2025-03-16: 7 days, 2 weekend
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 16));
        let calendar = resolve(&range, true, &[]).unwrap();

        assert_eq!(calendar.day_count(), 5);
        assert_eq!(
            calendar.dates(),
            &[
                d(2025, 3, 10),
                d(2025, 3, 11),
                d(2025, 3, 12),
                d(2025, 3, 13),
                d(2025, 3, 14),
            ]
        );
    }

    #[test]
    fn test_weekends_kept_without_flag() {
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 16));
        let calendar = resolve(&range, false, &[]).unwrap();
        assert_eq!(calendar.day_count(), 7);
        assert!(calendar.contains(d(2025, 3, 15)));
        assert!(calendar.contains(d(2025, 3, 16)));
    }

    #[test]
    fn test_manual_exclusion() {
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 14));
        let calendar = resolve(&range, false, &[d(2025, 3, 12)]).unwrap();

        assert_eq!(calendar.day_count(), 4);
        assert!(!calendar.contains(d(2025, 3, 12)));
    }

    #[test]
    fn test_exclusion_never_offered_is_noop() {
        // Excluding a Saturday after weekends are already dropped, and a
        // day outside the range, changes nothing
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 16));
        let calendar = resolve(&range, true, &[d(2025, 3, 15), d(2025, 4, 1)]).unwrap();
        assert_eq!(calendar.day_count(), 5);
    }

    #[test]
    fn test_weekend_only_range_empties_calendar() {
        // Saturday and Sunday only
        let range = DateRange::new(d(2025, 3, 15), d(2025, 3, 16));
        let err = resolve(&range, true, &[]).unwrap_err();
        assert!(matches!(err, PadocaError::EmptyCalendar));
    }

    #[test]
    fn test_all_days_manually_excluded() {
        let range = DateRange::new(d(2025, 3, 10), d(2025, 3, 11));
        let err = resolve(&range, false, &[d(2025, 3, 10), d(2025, 3, 11)]).unwrap_err();
        assert!(matches!(err, PadocaError::EmptyCalendar));
    }

    #[test]
    fn test_offered_days_lists_exclusion_candidates() {
        let range = DateRange::new(d(2025, 3, 14), d(2025, 3, 17));
        let offered = offered_days(&range, true).unwrap();
        // Friday and Monday; the weekend is never offered
        assert_eq!(offered, vec![d(2025, 3, 14), d(2025, 3, 17)]);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(d(2025, 3, 15))); // Saturday
        assert!(is_weekend(d(2025, 3, 16))); // Sunday
        assert!(!is_weekend(d(2025, 3, 17))); // Monday
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let range = DateRange::new(d(2025, 3, 1), d(2025, 3, 31));
        let a = resolve(&range, true, &[d(2025, 3, 19)]).unwrap();
        let b = resolve(&range, true, &[d(2025, 3, 19)]).unwrap();
        assert_eq!(a, b);
    }
}
