//! Core library for grocery label OCR processing.
//!
//! This crate provides:
//! - Expiry date extraction from noisy OCR text (keyword anchors, a fixed
//!   grammar catalog, compact `12NOV2025` forms, reasonableness window)
//! - Product name guessing from the lines above the date
//! - Scan outcome policy (manufacture-date reclassification, expiry status)
//! - The OCR collaborator trait and an optional pure Rust OCR backend

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod scan;

pub use error::{ExpiryError, OcrError, Result};
pub use extract::{
    extract_product_name, find_date, parse_date_from_text, Candidate, CandidateOrigin, DateExtractor,
    DateKeyword, DateMatch,
};
pub use models::config::ExpiryConfig;
pub use ocr::OcrEngine;
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use scan::{assess, DateKind, ExpiryStatus, ScanOutcome, ScanPolicy};
