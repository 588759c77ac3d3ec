//! Keyword-anchored candidates (`EXP`, `BEST BEFORE`, `MFG`, ...).

use serde::{Deserialize, Serialize};

use super::patterns::{CANDIDATE_TAIL, DATE_KEYWORD};
use super::{Candidate, CandidateOrigin};

/// A label printed in front of a date on packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKeyword {
    /// `EXP`, `EXPIRY`, `EXPIRES`, `EXPIRATION`.
    Expiry,
    BestBefore,
    /// `BB`, shorthand for best before.
    Bb,
    UseBy,
    Mfg,
    Mfd,
    Manufactured,
    Production,
}

impl DateKeyword {
    /// Classify a matched label. Spacing and case are ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let compact: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        match compact.as_str() {
            "EXP" | "EXPIRE" | "EXPIRES" | "EXPIRY" | "EXPIRATION" => Some(Self::Expiry),
            "BESTBEFORE" => Some(Self::BestBefore),
            "BB" => Some(Self::Bb),
            "USEBY" => Some(Self::UseBy),
            "MFG" => Some(Self::Mfg),
            "MFD" => Some(Self::Mfd),
            "MANUFACTURED" => Some(Self::Manufactured),
            "PRODUCTION" => Some(Self::Production),
            _ => None,
        }
    }

    /// Whether the label introduces a manufacture rather than an expiry date.
    pub fn is_manufacture(&self) -> bool {
        matches!(
            self,
            Self::Mfg | Self::Mfd | Self::Manufactured | Self::Production
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expiry => "EXP",
            Self::BestBefore => "BEST BEFORE",
            Self::Bb => "BB",
            Self::UseBy => "USE BY",
            Self::Mfg => "MFG",
            Self::Mfd => "MFD",
            Self::Manufactured => "MANUFACTURED",
            Self::Production => "PRODUCTION",
        }
    }
}

/// Candidates following each label, left to right.
///
/// `text` is expected to be whitespace-collapsed. A label glued to a
/// following letter (`EXPORT`, `BBQ`) is not an anchor, unless it is the
/// `DATE` suffix (`EXP DATE`). Each label only consumes itself and its
/// separators, so labels inside an earlier candidate are still visited.
pub fn keyword_candidates(text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for caps in DATE_KEYWORD.captures_iter(text) {
        let (Some(label), Some(whole)) = (caps.get(1), caps.get(0)) else {
            continue;
        };

        let glued = text[label.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if glued && caps.get(2).is_none() {
            continue;
        }

        let Some(keyword) = DateKeyword::from_label(label.as_str()) else {
            continue;
        };

        if let Some(tail) = CANDIDATE_TAIL.find(&text[whole.end()..]) {
            candidates.push(Candidate {
                text: tail.as_str().trim().to_string(),
                origin: CandidateOrigin::Keyword(keyword),
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_single_label() {
        let found = keyword_candidates("EXP 12/11/2025");
        assert_eq!(texts(&found), vec!["12/11/2025"]);
        assert_eq!(found[0].origin, CandidateOrigin::Keyword(DateKeyword::Expiry));
    }

    #[test]
    fn test_label_variants() {
        let found = keyword_candidates("best before: 01.02.2026 USE BY 03.02.2026");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].origin, CandidateOrigin::Keyword(DateKeyword::BestBefore));
        assert_eq!(found[0].text, "01.02.2026 USE BY 03.02.2026");
        assert_eq!(found[1].origin, CandidateOrigin::Keyword(DateKeyword::UseBy));
        assert_eq!(found[1].text, "03.02.2026");
    }

    #[test]
    fn test_date_suffix_skipped() {
        let found = keyword_candidates("EXP DATE: 12/11/2025");
        assert_eq!(texts(&found), vec!["12/11/2025"]);
    }

    #[test]
    fn test_glued_label_ignored() {
        assert!(keyword_candidates("EXPORT QUALITY 2025").is_empty());
        assert!(keyword_candidates("BBQ SAUCE 500ML").is_empty());
        assert_eq!(texts(&keyword_candidates("EXP12/11/2025")), vec!["12/11/2025"]);
    }

    #[test]
    fn test_short_tail_ignored() {
        assert!(keyword_candidates("EXP: 12").is_empty());
    }

    #[test]
    fn test_manufacture_labels() {
        assert!(DateKeyword::from_label("mfg").unwrap().is_manufacture());
        assert!(DateKeyword::from_label("PRODUCTION").unwrap().is_manufacture());
        assert!(!DateKeyword::from_label("Use  By").unwrap().is_manufacture());
        assert_eq!(DateKeyword::from_label("LOT"), None);
    }
}
