//! Shape-based sweep for date candidates anywhere in the text.

use super::patterns::GENERAL_DATE;
use super::{Candidate, CandidateOrigin};

/// Every date-shaped substring, in order of appearance.
pub fn general_candidates(text: &str) -> Vec<Candidate> {
    GENERAL_DATE
        .find_iter(text)
        .map(|m| Candidate {
            text: m.as_str().trim().to_string(),
            origin: CandidateOrigin::GeneralScan,
        })
        .collect()
}

/// Whether `text` contains anything shaped like a date.
pub fn looks_like_date(text: &str) -> bool {
    GENERAL_DATE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_candidates_in_order() {
        let found = general_candidates("PACKED 2026-01-05 SELL 12 NOV 2026 REF 04/2027");
        let texts: Vec<&str> = found.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["2026-01-05", "12 NOV 2026", "04/2027"]);
        assert!(found.iter().all(|c| c.origin == CandidateOrigin::GeneralScan));
    }

    #[test]
    fn test_no_candidates() {
        assert!(general_candidates("This text has no dates").is_empty());
        assert!(!looks_like_date("FRESH MILK 2L"));
    }
}
