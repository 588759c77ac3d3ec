//! Common regex patterns for label text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Normalization
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref LETTER_RUN: Regex = Regex::new(r"[A-Za-z]{3,}").unwrap();

    // Expiry/manufacture labels. Longer labels come first so that
    // "EXPIRES" is not consumed as "EXP" + "IRES".
    pub static ref DATE_KEYWORD: Regex = Regex::new(
        r"(?i)\b(EXPIRATION|EXPIRY|EXPIRES?|EXP|BEST\s*BEFORE|BB|USE\s*BY|MANUFACTURED|MFG|MFD|PRODUCTION)(\s*DATE)?[\s:.]*"
    ).unwrap();

    // Text following a label that may hold the date.
    pub static ref CANDIDATE_TAIL: Regex = Regex::new(
        r"^[0-9A-Za-z\s\-/.,]{4,}"
    ).unwrap();

    // Date-shaped substrings anywhere in the text.
    pub static ref GENERAL_DATE: Regex = Regex::new(concat!(
        r"\b\d{1,2}\s*[/\-.]\s*\d{1,2}\s*[/\-.]\s*\d{2,4}\b",
        r"|\b\d{4}\s*-\s*\d{1,2}\s*-\s*\d{1,2}\b",
        r"|\b\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4}\b",
        r"|\b[A-Za-z]{3,9}\s+\d{1,2}\s*,?\s*\d{4}\b",
        r"|\b\d{1,2}\s*[\-.][A-Za-z]{3,9}\s*[\-.]\s*\d{2,4}\b",
        r"|\b\d{2}[A-Za-z]{3}\d{4}\b",
        r"|\b\d{1,2}[/\-]\d{4}\b",
    )).unwrap();

    // Compact day + month abbreviation + year, e.g. 12NOV2025 or 03Jan26.
    pub static ref COMPACT_DATE: Regex = Regex::new(
        r"(?i)(\d{1,2})([a-z]{3})(\d{2,4})"
    ).unwrap();

    // Lines that end the product name block.
    pub static ref PRODUCT_STOP_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:EXPIRATION|EXPIRY|EXPIRES?|EXP|BEST\s*BEFORE|BB|USE\s*BY|MANUFACTURED|MFG|MFD|PRODUCTION|LOT|BATCH)(?:\b|\d)"
    ).unwrap();
}
