//! Output formats shared by `scan` and `batch`.

use serde::Serialize;

use expiry_core::{DateKind, DateMatch, ExpiryStatus, ScanOutcome};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// One scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Input file path.
    pub file: String,

    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ScanOutcome>,

    /// Every validated date, in priority order (`--all-dates`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<DateMatch>,

    /// Why the file could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanReport {
    pub fn ok(file: impl Into<String>, outcome: ScanOutcome) -> Self {
        Self {
            file: file.into(),
            outcome: Some(outcome),
            candidates: Vec::new(),
            error: None,
        }
    }

    pub fn failed(file: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file: file.into(),
            outcome: None,
            candidates: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

pub fn format_reports(reports: &[ScanReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if let [single] = reports {
                Ok(serde_json::to_string_pretty(single)?)
            } else {
                Ok(serde_json::to_string_pretty(reports)?)
            }
        }
        OutputFormat::Csv => format_csv(reports),
        OutputFormat::Text => Ok(reports.iter().map(format_text).collect::<Vec<_>>().join("\n")),
    }
}

fn format_csv(reports: &[ScanReport]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record([
        "file",
        "product_name",
        "detected_date",
        "date_kind",
        "expiry_date",
        "days_to_expiry",
        "status",
        "note",
        "error",
    ])?;

    for report in reports {
        let outcome = report.outcome.as_ref();
        let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

        wtr.write_record([
            report.file.clone(),
            outcome.map(|o| o.product_name.clone()).unwrap_or_default(),
            date(outcome.and_then(|o| o.detected_date)),
            outcome
                .and_then(|o| o.date_kind)
                .map(|k| date_kind_label(k).to_string())
                .unwrap_or_default(),
            date(outcome.and_then(|o| o.expiry_date)),
            outcome
                .and_then(|o| o.days_to_expiry)
                .map(|d| d.to_string())
                .unwrap_or_default(),
            outcome.map(|o| o.status.as_str().to_string()).unwrap_or_default(),
            outcome
                .and_then(|o| o.note.as_deref())
                .map(|n| n.replace('\n', " "))
                .unwrap_or_default(),
            report.error.clone().unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ScanReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("File: {}\n", report.file));

    let Some(outcome) = &report.outcome else {
        output.push_str(&format!(
            "Error: {}\n",
            report.error.as_deref().unwrap_or("unknown")
        ));
        return output;
    };

    output.push_str(&format!("Product: {}\n", outcome.product_name));

    match (outcome.detected_date, outcome.date_kind) {
        (Some(date), Some(kind)) => {
            output.push_str(&format!("Date: {} ({})", date, date_kind_label(kind)));
            if let Some(source) = &outcome.source {
                output.push_str(&format!(" from \"{}\"", source));
            }
            output.push('\n');
        }
        _ => output.push_str("Date: not found\n"),
    }

    if let Some(expiry) = outcome.expiry_date {
        output.push_str(&format!("Expiry: {}\n", expiry));
    }

    output.push_str(&format!("Status: {}", status_label(outcome.status)));
    if let Some(days) = outcome.days_to_expiry {
        output.push_str(&format!(" ({} days)", days));
    }
    output.push('\n');

    if let Some(note) = &outcome.note {
        output.push_str(&format!("Note: {}\n", note.replace('\n', " ")));
    }

    for candidate in &report.candidates {
        output.push_str(&format!(
            "  candidate {} from \"{}\"\n",
            candidate.date, candidate.source
        ));
    }

    output
}

fn date_kind_label(kind: DateKind) -> &'static str {
    match kind {
        DateKind::Expiry => "expiry",
        DateKind::Manufacture => "manufacture",
    }
}

pub fn status_label(status: ExpiryStatus) -> &'static str {
    match status {
        ExpiryStatus::Expired => "EXPIRED",
        ExpiryStatus::ExpiringSoon => "expiring soon",
        ExpiryStatus::Fresh => "fresh",
        ExpiryStatus::Unknown => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use expiry_core::{assess, ScanPolicy};

    fn report() -> ScanReport {
        let now = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let outcome = assess("FRESH MILK 2L\nEXP 12/11/2025", now, &ScanPolicy::default());
        ScanReport::ok("milk.txt", outcome)
    }

    #[test]
    fn test_json_single_is_object() {
        let json = format_reports(&[report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "milk.txt");
        assert_eq!(value["expiry_date"], "2025-11-12");
        assert_eq!(value["status"], "expiring_soon");
    }

    #[test]
    fn test_csv_rows() {
        let reports = [report(), ScanReport::failed("broken.png", "OCR failed")];
        let csv = format_reports(&reports, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("milk.txt,FRESH MILK 2L,2025-11-12,expiry,2025-11-12,11,expiring_soon"));
        assert!(lines[2].ends_with("OCR failed"));
    }

    #[test]
    fn test_text_summary() {
        let text = format_reports(&[report()], OutputFormat::Text).unwrap();
        assert!(text.contains("Product: FRESH MILK 2L"));
        assert!(text.contains("Date: 2025-11-12 (expiry) from \"12/11/2025\""));
        assert!(text.contains("Status: expiring soon (11 days)"));
    }
}
