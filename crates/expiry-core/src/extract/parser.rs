//! Candidate resolution and the public date-finding entry points.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::compact::parse_compact;
use super::grammar::attempts;
use super::keywords::keyword_candidates;
use super::normalize::{collapse_whitespace, NormalizedForms};
use super::scanner::general_candidates;
use super::validator::is_reasonable;
use super::{Candidate, DateMatch, FieldExtractor};

/// Resolve one candidate to a validated date.
///
/// Tries the grammar catalog over all four spellings, then the compact
/// parser on the original and the whitespace-collapsed spelling.
pub fn resolve_candidate(candidate: &str, now: NaiveDate) -> Option<NaiveDate> {
    let forms = NormalizedForms::new(candidate);
    if forms.is_empty() {
        return None;
    }

    for (grammar, form) in attempts(&forms) {
        let Some(date) = grammar.parse(form) else {
            continue;
        };
        if is_reasonable(date, now) {
            trace!("{:?} matched grammar {} as {}", form, grammar.name, date);
            return Some(date);
        }
        trace!("{:?} parsed by {} to {} outside the window", form, grammar.name, date);
    }

    parse_compact(&forms.original, now).or_else(|| parse_compact(&forms.normalized, now))
}

fn resolve(candidate: &Candidate, now: NaiveDate) -> Option<DateMatch> {
    resolve_candidate(&candidate.text, now).map(|date| DateMatch {
        date,
        origin: candidate.origin,
        source: candidate.text.clone(),
    })
}

/// Find the highest-priority validated date in `text`.
///
/// Keyword-anchored candidates are tried first, left to right; the general
/// shape sweep is only consulted when none of them resolves.
pub fn find_date(text: &str, now: NaiveDate) -> Option<DateMatch> {
    let cleaned = collapse_whitespace(text);
    if cleaned.is_empty() {
        return None;
    }

    let found = keyword_candidates(&cleaned)
        .iter()
        .find_map(|candidate| resolve(candidate, now))
        .or_else(|| {
            general_candidates(&cleaned)
                .iter()
                .find_map(|candidate| resolve(candidate, now))
        });

    match &found {
        Some(m) => debug!("Found date {} from {:?} ({:?})", m.date, m.source, m.origin),
        None => debug!("No date found in {} characters of text", text.len()),
    }

    found
}

/// Every distinct validated date in priority order.
pub fn find_all_dates(text: &str, now: NaiveDate) -> Vec<DateMatch> {
    let cleaned = collapse_whitespace(text);
    let mut results: Vec<DateMatch> = Vec::new();

    let candidates = keyword_candidates(&cleaned)
        .into_iter()
        .chain(general_candidates(&cleaned));

    for candidate in candidates {
        if let Some(found) = resolve(&candidate, now) {
            // Skip if already found
            if results.iter().any(|r| r.date == found.date) {
                continue;
            }
            results.push(found);
        }
    }

    results
}

/// Extract the date from OCR text, or `None`.
pub fn parse_date_from_text(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    find_date(text, now).map(|m| m.date)
}

/// Date field extractor bound to a reference date.
#[derive(Debug, Clone, Copy)]
pub struct DateExtractor {
    now: NaiveDate,
}

impl DateExtractor {
    pub fn new(now: NaiveDate) -> Self {
        Self { now }
    }

    /// Reference date of the reasonableness window.
    pub fn now(&self) -> NaiveDate {
        self.now
    }
}

impl FieldExtractor for DateExtractor {
    type Output = DateMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        find_date(text, self.now)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        find_all_dates(text, self.now)
    }
}
