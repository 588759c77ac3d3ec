//! Fallback parser for separator-less dates such as `12NOV2025` or `03Jan26`.

use chrono::NaiveDate;

use super::patterns::COMPACT_DATE;
use super::validator::is_reasonable;

/// English month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Map a month name or abbreviation (any case) to 1..=12 by its first three letters.
pub fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == prefix)
        .map(|i| i as u32 + 1)
}

/// Expand a two-digit year: below 50 is 20xx, otherwise 19xx.
pub fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year < 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

/// Parse the first compact date in `text`, if it is a valid and reasonable date.
pub fn parse_compact(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    let caps = COMPACT_DATE.captures(text)?;

    let day: u32 = caps[1].parse().ok()?;
    let month = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| caps[2].eq_ignore_ascii_case(abbr))
        .map(|i| i as u32 + 1)?;
    let year = expand_year(caps[3].parse().ok()?);

    NaiveDate::from_ymd_opt(year, month, day).filter(|date| is_reasonable(*date, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDate {
        ymd(2025, 6, 1)
    }

    #[test]
    fn test_four_digit_year() {
        assert_eq!(parse_compact("12NOV2025", now()), Some(ymd(2025, 11, 12)));
        assert_eq!(parse_compact("lot 7 12nov2025", now()), Some(ymd(2025, 11, 12)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_compact("03JAN26", now()), Some(ymd(2026, 1, 3)));
        assert_eq!(expand_year(49), 2049);
        assert_eq!(expand_year(50), 1950);
        assert_eq!(expand_year(2031), 2031);
    }

    #[test]
    fn test_rejects_unknown_month_and_bad_day() {
        assert_eq!(parse_compact("12XYZ2025", now()), None);
        assert_eq!(parse_compact("31FEB2026", now()), None);
    }

    #[test]
    fn test_rejects_outside_window() {
        // 1999 via the pivot rule
        assert_eq!(parse_compact("01JAN99", now()), None);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Nov"), Some(11));
        assert_eq!(month_number("september"), Some(9));
        assert_eq!(month_number("No"), None);
        assert_eq!(month_number("Xyz"), None);
    }
}
