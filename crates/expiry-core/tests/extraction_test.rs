//! End-to-end behavior of the date and product name extractors.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use expiry_core::extract::{CandidateOrigin, DateKeyword};
use expiry_core::{assess, extract_product_name, find_date, parse_date_from_text, DateKind, ScanPolicy};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> NaiveDate {
    ymd(2025, 6, 1)
}

#[test]
fn test_round_trip_every_grammar() {
    // Day 17 keeps MM/dd/yyyy unambiguous under the day-first policy.
    let date = ymd(2026, 3, 17);
    let first = ymd(2026, 3, 1);
    let cases = [
        ("%Y-%m-%d", date),
        ("%d-%m-%Y", date),
        ("%d/%m/%Y", date),
        ("%m/%d/%Y", date),
        ("%d.%m.%Y", date),
        ("%d %b %Y", date),
        ("%d %B %Y", date),
        ("%b %d, %Y", date),
        ("%B %d, %Y", date),
        ("%d-%b-%Y", date),
        ("%d%b%Y", date),
        ("%d-%m-%y", date),
        ("%d/%m/%y", date),
        ("%d.%m.%y", date),
        ("%m/%y", first),
        ("%m-%y", first),
        ("%m/%Y", first),
        ("%m-%Y", first),
    ];

    for (format, expected) in cases {
        let printed = expected.format(format).to_string();
        for text in [format!("EXP {printed}"), format!("EXP {}", printed.to_uppercase())] {
            assert_eq!(
                parse_date_from_text(&text, now()),
                Some(expected),
                "format {format} printed as {text:?}"
            );
        }
    }
}

#[test]
fn test_out_of_window_dates_rejected() {
    assert_eq!(parse_date_from_text("EXP 30/05/2020", now()), None);
    assert_eq!(parse_date_from_text("EXP 01/06/2020", now()), Some(ymd(2020, 6, 1)));
    assert_eq!(parse_date_from_text("EXP 01/06/2035", now()), Some(ymd(2035, 6, 1)));
    assert_eq!(parse_date_from_text("EXP 13/06/2035", now()), None);
    assert_eq!(parse_date_from_text("Since 1998 - 12 NOV 1998", now()), None);
}

#[test]
fn test_keyword_anchored_date_wins() {
    let text = "Packed 01/08/2025\nSmoked Salmon 200g\nBEST BEFORE 20/08/2025";
    let found = find_date(text, now()).unwrap();
    assert_eq!(found.date, ymd(2025, 8, 20));
    assert_eq!(found.origin, CandidateOrigin::Keyword(DateKeyword::BestBefore));
}

#[test]
fn test_compact_forms() {
    assert_eq!(parse_date_from_text("12NOV2025", now()), Some(ymd(2025, 11, 12)));
    assert_eq!(parse_date_from_text("03JAN26", now()), Some(ymd(2026, 1, 3)));
}

#[test]
fn test_no_date() {
    assert_eq!(parse_date_from_text("This text has no dates", now()), None);
}

#[test]
fn test_multi_format_acceptance() {
    for text in [
        "EXP 12/11/2025",
        "BEST BEFORE 12-11-2025",
        "USE BY 12.11.2025",
        "EXPIRES 12 NOV 2025",
        "BB: 12NOV2025",
    ] {
        assert_eq!(
            parse_date_from_text(text, now()),
            Some(ymd(2025, 11, 12)),
            "should parse {text:?}"
        );
    }
}

#[test]
fn test_product_name_excludes_date_lines() {
    let name = extract_product_name("FRESH MILK 2L\nEXP 12/11/2025\nLOT 12345");
    assert!(name.contains("MILK"));
    assert!(!name.contains("EXP"));
    assert!(!name.contains("LOT"));
}

#[test]
fn test_idempotent() {
    let text = "Greek Yogurt\nUSE BY 03 JAN 2026\nL2231";
    assert_eq!(parse_date_from_text(text, now()), parse_date_from_text(text, now()));
    assert_eq!(extract_product_name(text), extract_product_name(text));
}

#[test]
fn test_concurrent_calls_agree() {
    let text = "Cheddar\nEXP 15/12/2025";
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse_date_from_text(text, now())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(ymd(2025, 12, 15)));
    }
}

#[test]
fn test_noisy_ocr_label() {
    let text = "  ORGANIC\n  whole milk 1L \n\n best before:  14 jun 2025\nL0T 4471 22:31\n";
    assert_eq!(parse_date_from_text(text, now()), Some(ymd(2025, 6, 14)));
    assert_eq!(extract_product_name(text), "ORGANIC whole milk 1L");
}

#[test]
fn test_manufacture_reclassification() {
    let outcome = assess("RICE CRACKERS\nMFD 10 MAR 2025", now(), &ScanPolicy::default());
    assert_eq!(outcome.product_name, "RICE CRACKERS");
    assert_eq!(outcome.date_kind, Some(DateKind::Manufacture));
    assert_eq!(outcome.detected_date, Some(ymd(2025, 3, 10)));
    assert_eq!(outcome.expiry_date, Some(ymd(2025, 9, 10)));
}
