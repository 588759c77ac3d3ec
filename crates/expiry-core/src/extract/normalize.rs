//! Candidate normalization.
//!
//! OCR capitalization is unreliable, and month-name grammars only accept
//! English title case (`Nov`, `November`). Every candidate is therefore
//! tried in four spellings.

use super::patterns::{LETTER_RUN, WHITESPACE_RUN};

/// Collapse every run of whitespace to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Capitalize every maximal run of three or more ASCII letters.
///
/// Shorter runs and digits are left alone, so `12NOV2025` becomes
/// `12Nov2025` and `BB 03` is untouched.
pub fn title_case_words(text: &str) -> String {
    LETTER_RUN
        .replace_all(text, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..1].to_ascii_uppercase());
            out.push_str(&word[1..].to_ascii_lowercase());
            out
        })
        .into_owned()
}

/// The fixed set of spellings tried for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForms {
    /// Candidate as captured, trimmed.
    pub original: String,
    /// Whitespace-collapsed candidate.
    pub normalized: String,
    /// Title-cased `original`.
    pub title_original: String,
    /// Title-cased `normalized`.
    pub title_normalized: String,
}

impl NormalizedForms {
    pub fn new(candidate: &str) -> Self {
        let original = candidate.trim().to_string();
        let normalized = collapse_whitespace(&original);
        let title_original = title_case_words(&original);
        let title_normalized = title_case_words(&normalized);

        Self {
            original,
            normalized,
            title_original,
            title_normalized,
        }
    }

    /// Variants in their fixed trial order.
    pub fn variants(&self) -> [&str; 4] {
        [
            &self.original,
            &self.normalized,
            &self.title_original,
            &self.title_normalized,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}
