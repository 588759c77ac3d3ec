//! Scan outcome: what a caller stores after reading one label.
//!
//! Combines the two extraction functions with the manufacture-date policy.
//! When the label text mentions manufacture (`MFG`, `MFD`, `MANUFAC...`,
//! `PRODUCTION`), the extracted date is read as a manufacture date and the
//! expiry is estimated by adding a fixed shelf life.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::extract::{extract_product_name, find_date, CandidateOrigin};
use crate::models::config::ExtractionConfig;

/// Upper-case fragments that mark a manufacture date.
pub const MANUFACTURE_HINTS: [&str; 4] = ["MFG", "MANUFAC", "MFD", "PRODUCTION"];

/// Knobs for interpreting an extracted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPolicy {
    /// Months added to a manufacture date.
    pub shelf_life_months: u32,
    /// Threshold for [`ExpiryStatus::ExpiringSoon`].
    pub expiring_soon_days: i64,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        ExtractionConfig::default().into()
    }
}

impl From<ExtractionConfig> for ScanPolicy {
    fn from(config: ExtractionConfig) -> Self {
        Self {
            shelf_life_months: config.shelf_life_months,
            expiring_soon_days: config.expiring_soon_days,
        }
    }
}

impl From<&ExtractionConfig> for ScanPolicy {
    fn from(config: &ExtractionConfig) -> Self {
        config.clone().into()
    }
}

/// Meaning assigned to the extracted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    Expiry,
    Manufacture,
}

/// Freshness of an item relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Fresh,
    /// No expiry date could be determined.
    Unknown,
}

impl ExpiryStatus {
    /// Classify by days remaining (negative when already expired).
    pub fn from_days(days_to_expiry: Option<i64>, expiring_soon_days: i64) -> Self {
        match days_to_expiry {
            None => Self::Unknown,
            Some(days) if days < 0 => Self::Expired,
            Some(days) if days <= expiring_soon_days => Self::ExpiringSoon,
            Some(_) => Self::Fresh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring_soon",
            Self::Fresh => "fresh",
            Self::Unknown => "unknown",
        }
    }
}

/// Structured result of reading one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Product name guess, empty only for blank text.
    pub product_name: String,

    /// Date as printed on the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_date: Option<NaiveDate>,

    /// Meaning assigned to `detected_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_kind: Option<DateKind>,

    /// Candidate origin of `detected_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<CandidateOrigin>,

    /// Candidate text `detected_date` was read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Expiry date, estimated for manufacture dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// Days from the reference date to expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiry: Option<i64>,

    pub status: ExpiryStatus,

    /// Annotation for the stored record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Whether `text` carries any manufacture hint.
pub fn mentions_manufacture(text: &str) -> bool {
    let upper = text.to_uppercase();
    MANUFACTURE_HINTS.iter().any(|hint| upper.contains(hint))
}

/// Read one label's OCR text into a [`ScanOutcome`].
pub fn assess(text: &str, now: NaiveDate, policy: &ScanPolicy) -> ScanOutcome {
    let product_name = extract_product_name(text);
    let found = find_date(text, now);

    let Some(found) = found else {
        info!("No date found for {:?}", product_name);
        return ScanOutcome {
            product_name,
            detected_date: None,
            date_kind: None,
            origin: None,
            source: None,
            expiry_date: None,
            days_to_expiry: None,
            status: ExpiryStatus::Unknown,
            note: None,
        };
    };

    let (date_kind, expiry_date, note) = if mentions_manufacture(text) {
        let estimated = found
            .date
            .checked_add_months(Months::new(policy.shelf_life_months));
        let note = format!(
            "Manufacture date detected: {}\nEstimated expiry ({} months added)",
            found.date, policy.shelf_life_months
        );
        debug!("Treating {} as manufacture date, estimated expiry {:?}", found.date, estimated);
        (DateKind::Manufacture, estimated, Some(note))
    } else {
        (DateKind::Expiry, Some(found.date), None)
    };

    let days_to_expiry = expiry_date.map(|expiry| (expiry - now).num_days());
    let status = ExpiryStatus::from_days(days_to_expiry, policy.expiring_soon_days);

    info!(
        "Scanned {:?}: {} date {}, status {}",
        product_name,
        match date_kind {
            DateKind::Expiry => "expiry",
            DateKind::Manufacture => "manufacture",
        },
        found.date,
        status.as_str()
    );

    ScanOutcome {
        product_name,
        detected_date: Some(found.date),
        date_kind: Some(date_kind),
        origin: Some(found.origin),
        source: Some(found.source),
        expiry_date,
        days_to_expiry,
        status,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiry_label() {
        let now = ymd(2025, 11, 1);
        let outcome = assess("FRESH MILK 2L\nEXP 12/11/2025\nLOT 12345", now, &ScanPolicy::default());

        assert_eq!(outcome.product_name, "FRESH MILK 2L");
        assert_eq!(outcome.detected_date, Some(ymd(2025, 11, 12)));
        assert_eq!(outcome.date_kind, Some(DateKind::Expiry));
        assert_eq!(outcome.expiry_date, Some(ymd(2025, 11, 12)));
        assert_eq!(outcome.days_to_expiry, Some(11));
        assert_eq!(outcome.status, ExpiryStatus::ExpiringSoon);
        assert_eq!(outcome.note, None);
    }

    #[test]
    fn test_manufacture_label_adds_shelf_life() {
        let now = ymd(2025, 6, 1);
        let outcome = assess("CRACKERS\nMFG 15/05/2025", now, &ScanPolicy::default());

        assert_eq!(outcome.detected_date, Some(ymd(2025, 5, 15)));
        assert_eq!(outcome.date_kind, Some(DateKind::Manufacture));
        assert_eq!(outcome.expiry_date, Some(ymd(2025, 11, 15)));
        assert_eq!(outcome.status, ExpiryStatus::Fresh);
        assert_eq!(
            outcome.note.as_deref(),
            Some("Manufacture date detected: 2025-05-15\nEstimated expiry (6 months added)")
        );
    }

    #[test]
    fn test_custom_shelf_life() {
        let policy = ScanPolicy {
            shelf_life_months: 12,
            expiring_soon_days: 7,
        };
        let outcome = assess("Production: 31.01.2025", ymd(2025, 6, 1), &policy);
        assert_eq!(outcome.expiry_date, Some(ymd(2026, 1, 31)));
    }

    #[test]
    fn test_no_date() {
        let outcome = assess("This text has no dates", ymd(2025, 6, 1), &ScanPolicy::default());
        assert_eq!(outcome.product_name, "This text has no dates");
        assert_eq!(outcome.detected_date, None);
        assert_eq!(outcome.status, ExpiryStatus::Unknown);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(ExpiryStatus::from_days(Some(-1), 14), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days(Some(0), 14), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::from_days(Some(14), 14), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::from_days(Some(15), 14), ExpiryStatus::Fresh);
        assert_eq!(ExpiryStatus::from_days(None, 14), ExpiryStatus::Unknown);
    }

    #[test]
    fn test_outcome_serializes_without_empty_fields() {
        let outcome = assess("", ymd(2025, 6, 1), &ScanPolicy::default());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"product_name": "", "status": "unknown"}));
    }
}
