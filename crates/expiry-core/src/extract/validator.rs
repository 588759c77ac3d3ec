//! Reasonableness window for extracted dates.

use chrono::{Months, NaiveDate};

/// Oldest accepted date, in years before `now`.
pub const MAX_YEARS_PAST: u32 = 5;

/// Latest accepted date, in years after `now`.
pub const MAX_YEARS_AHEAD: u32 = 10;

/// Inclusive `[earliest, latest]` bounds around `now`.
pub fn reasonable_window(now: NaiveDate) -> (NaiveDate, NaiveDate) {
    let earliest = now
        .checked_sub_months(Months::new(MAX_YEARS_PAST * 12))
        .unwrap_or(NaiveDate::MIN);
    let latest = now
        .checked_add_months(Months::new(MAX_YEARS_AHEAD * 12))
        .unwrap_or(NaiveDate::MAX);
    (earliest, latest)
}

/// Whether `date` is plausible on a label read at `now`.
pub fn is_reasonable(date: NaiveDate, now: NaiveDate) -> bool {
    let (earliest, latest) = reasonable_window(now);
    earliest <= date && date <= latest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let now = ymd(2025, 6, 15);
        assert!(is_reasonable(ymd(2020, 6, 15), now));
        assert!(is_reasonable(ymd(2035, 6, 15), now));
        assert!(!is_reasonable(ymd(2020, 6, 14), now));
        assert!(!is_reasonable(ymd(2035, 6, 16), now));
    }

    #[test]
    fn test_leap_day_now() {
        let (earliest, latest) = reasonable_window(ymd(2024, 2, 29));
        assert_eq!(earliest, ymd(2019, 2, 28));
        assert_eq!(latest, ymd(2034, 2, 28));
    }
}
