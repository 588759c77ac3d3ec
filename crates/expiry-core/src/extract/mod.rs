//! Expiry date and product name extraction from OCR text.

pub mod compact;
pub mod grammar;
pub mod keywords;
pub mod normalize;
mod parser;
pub mod patterns;
pub mod product;
pub mod scanner;
pub mod validator;

pub use grammar::{DateGrammar, NumericOrderPolicy, CATALOG, NUMERIC_ORDER_POLICY};
pub use keywords::DateKeyword;
pub use normalize::NormalizedForms;
pub use parser::{find_all_dates, find_date, parse_date_from_text, resolve_candidate, DateExtractor};
pub use product::extract_product_name;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the highest-priority occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Where a candidate substring came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "keyword")]
pub enum CandidateOrigin {
    /// Text following a label such as `EXP` or `MFG`.
    Keyword(DateKeyword),
    /// Date-shaped text found anywhere.
    GeneralScan,
}

/// A substring suspected to encode a date. Lives for one parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub origin: CandidateOrigin,
}

/// A validated date together with the candidate that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    /// Validated calendar date.
    pub date: NaiveDate,
    /// Origin of the winning candidate.
    pub origin: CandidateOrigin,
    /// Candidate text as captured.
    pub source: String,
}

impl DateMatch {
    /// Label that anchored the date, if any.
    pub fn keyword(&self) -> Option<DateKeyword> {
        match self.origin {
            CandidateOrigin::Keyword(keyword) => Some(keyword),
            CandidateOrigin::GeneralScan => None,
        }
    }
}
