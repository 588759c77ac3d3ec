//! The ordered date grammar catalog.
//!
//! Each grammar is a prefix-anchored regex with named `day`, `month` and
//! `year` groups plus a description of how to read them. A grammar must
//! consume the form up to whitespace, light punctuation or the end, so
//! `12/11/2025 LOT 5` reads as `12/11/2025` while `12/11/2025` is never
//! mistaken for `MM/yy`.
//!
//! The order of [`CATALOG`] is part of the behavior: ambiguous input is
//! decided by whichever grammar comes first.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::compact::{expand_year, month_number};
use super::normalize::NormalizedForms;

/// How `dd/MM` vs `MM/dd` ambiguity is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOrderPolicy {
    /// `03/04/2026` is 3 April.
    DayFirst,
    /// `03/04/2026` is 4 March.
    MonthFirst,
}

/// Labels printed outside North America are read day-first.
pub const NUMERIC_ORDER_POLICY: NumericOrderPolicy = NumericOrderPolicy::DayFirst;

/// Order of the date fields in a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    YearMonthDay,
    DayMonthYear,
    MonthDayYear,
    /// No day field; the date falls on the 1st of the month.
    MonthYear,
}

/// How the month is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthForm {
    Numeric,
    /// `Jan` .. `Dec`, title case.
    Abbreviated,
    /// `January` .. `December`, title case.
    Full,
}

/// Digits in the year field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearForm {
    Four,
    /// Expanded with the 50-year pivot.
    Two,
}

/// A single calendar-date grammar.
#[derive(Debug)]
pub struct DateGrammar {
    /// Pattern name in `dd/MM/yyyy` notation.
    pub name: &'static str,
    pub order: FieldOrder,
    pub month: MonthForm,
    pub year: YearForm,
    pattern: Regex,
}

const DAY: &str = r"(?P<day>\d{1,2})";
const MONTH_NUM: &str = r"(?P<month>\d{1,2})";
const MONTH_ABBR: &str = r"(?P<month>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";
const MONTH_FULL: &str = r"(?P<month>January|February|March|April|May|June|July|August|September|October|November|December)";
const YEAR4: &str = r"(?P<year>\d{4})";
const YEAR2: &str = r"(?P<year>\d{2})";
const END: &str = r"(?:$|[\s,;.])";

impl DateGrammar {
    fn new(
        name: &'static str,
        order: FieldOrder,
        month: MonthForm,
        year: YearForm,
        body: &str,
    ) -> Self {
        let pattern = Regex::new(&format!("^{body}{END}"))
            .unwrap_or_else(|e| panic!("invalid grammar {name}: {e}"));
        Self {
            name,
            order,
            month,
            year,
            pattern,
        }
    }

    /// Parse `form` into a calendar date. No range check is applied here.
    pub fn parse(&self, form: &str) -> Option<NaiveDate> {
        let caps = self.pattern.captures(form)?;
        let day = match self.order {
            FieldOrder::MonthYear => 1,
            _ => caps.name("day")?.as_str().parse().ok()?,
        };
        let month = self.read_month(&caps)?;
        let year: i32 = caps.name("year")?.as_str().parse().ok()?;
        let year = match self.year {
            YearForm::Four => year,
            YearForm::Two => expand_year(year),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn read_month(&self, caps: &Captures) -> Option<u32> {
        let raw = caps.name("month")?.as_str();
        match self.month {
            MonthForm::Numeric => raw.parse().ok(),
            MonthForm::Abbreviated | MonthForm::Full => month_number(raw),
        }
    }
}

fn numeric(name: &'static str, order: FieldOrder, sep: &str, year: YearForm) -> DateGrammar {
    let y = match year {
        YearForm::Four => YEAR4,
        YearForm::Two => YEAR2,
    };
    let sep = format!(r"\s*{sep}\s*");
    let body = match order {
        FieldOrder::YearMonthDay => format!("{y}{sep}{MONTH_NUM}{sep}{DAY}"),
        FieldOrder::DayMonthYear => format!("{DAY}{sep}{MONTH_NUM}{sep}{y}"),
        FieldOrder::MonthDayYear => format!("{MONTH_NUM}{sep}{DAY}{sep}{y}"),
        FieldOrder::MonthYear => format!("{MONTH_NUM}{sep}{y}"),
    };
    DateGrammar::new(name, order, MonthForm::Numeric, year, &body)
}

fn slash_grammars() -> [DateGrammar; 2] {
    let day_first = numeric("dd/MM/yyyy", FieldOrder::DayMonthYear, "/", YearForm::Four);
    let month_first = numeric("MM/dd/yyyy", FieldOrder::MonthDayYear, "/", YearForm::Four);
    match NUMERIC_ORDER_POLICY {
        NumericOrderPolicy::DayFirst => [day_first, month_first],
        NumericOrderPolicy::MonthFirst => [month_first, day_first],
    }
}

fn build_catalog() -> Vec<DateGrammar> {
    use FieldOrder::*;
    use MonthForm::*;
    use YearForm::*;

    let mut catalog = vec![
        numeric("yyyy-MM-dd", YearMonthDay, "-", Four),
        numeric("dd-MM-yyyy", DayMonthYear, "-", Four),
    ];
    catalog.extend(slash_grammars());
    catalog.extend([
        numeric("dd.MM.yyyy", DayMonthYear, r"\.", Four),
        DateGrammar::new("dd MMM yyyy", DayMonthYear, Abbreviated, Four, &format!("{DAY} {MONTH_ABBR} {YEAR4}")),
        DateGrammar::new("dd MMMM yyyy", DayMonthYear, Full, Four, &format!("{DAY} {MONTH_FULL} {YEAR4}")),
        DateGrammar::new("MMM dd, yyyy", MonthDayYear, Abbreviated, Four, &format!(r"{MONTH_ABBR} {DAY}(?:,\s*|\s+){YEAR4}")),
        DateGrammar::new("MMMM dd, yyyy", MonthDayYear, Full, Four, &format!(r"{MONTH_FULL} {DAY}(?:,\s*|\s+){YEAR4}")),
        DateGrammar::new("dd-MMM-yyyy", DayMonthYear, Abbreviated, Four, &format!(r"{DAY}\s*[-.]\s*{MONTH_ABBR}\s*[-.]\s*{YEAR4}")),
        DateGrammar::new("ddMMMyyyy", DayMonthYear, Abbreviated, Four, &format!("{DAY}{MONTH_ABBR}{YEAR4}")),
        numeric("dd-MM-yy", DayMonthYear, "-", Two),
        numeric("dd/MM/yy", DayMonthYear, "/", Two),
        numeric("dd.MM.yy", DayMonthYear, r"\.", Two),
        numeric("MM/yy", MonthYear, "/", Two),
        numeric("MM-yy", MonthYear, "-", Two),
        numeric("MM/yyyy", MonthYear, "/", Four),
        numeric("MM-yyyy", MonthYear, "-", Four),
    ]);
    catalog
}

lazy_static! {
    /// Grammars in trial order.
    pub static ref CATALOG: Vec<DateGrammar> = build_catalog();
}

/// Every (grammar, spelling) pair in trial order.
///
/// The grammar loop is outer: a candidate is tried in all four spellings
/// against the first grammar before the second grammar is consulted.
pub fn attempts(forms: &NormalizedForms) -> impl Iterator<Item = (&'static DateGrammar, &str)> + '_ {
    let catalog: &'static [DateGrammar] = &CATALOG;
    catalog
        .iter()
        .flat_map(move |grammar| forms.variants().into_iter().map(move |form| (grammar, form)))
}
