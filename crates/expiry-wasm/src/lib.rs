//! WASM bindings for grocery label expiry extraction.
//!
//! OCR runs on the JavaScript side; these functions take the recognized
//! text and return dates, product names and scan outcomes.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use expiry_core::models::config::ExtractionConfig;
use expiry_core::{assess, ScanPolicy};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse an optional `YYYY-MM-DD` reference date.
fn parse_today(today: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match today.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| format!("invalid reference date {:?}: {}", text, e)),
        None => Ok(None),
    }
}

/// Calendar date of the host clock.
fn host_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("host clock returned an invalid date"))
}

fn reference_date(today: Option<String>) -> Result<NaiveDate, JsValue> {
    match parse_today(today.as_deref()).map_err(|e| JsValue::from_str(&e))? {
        Some(date) => Ok(date),
        None => host_today(),
    }
}

/// Find the most likely date in OCR text.
///
/// Returns `YYYY-MM-DD`, or `undefined` when no plausible date is present.
/// `today` defaults to the host's local date.
#[wasm_bindgen]
pub fn parse_date_from_text(text: &str, today: Option<String>) -> Result<Option<String>, JsValue> {
    let now = reference_date(today)?;
    Ok(expiry_core::parse_date_from_text(text, now).map(|d| d.to_string()))
}

/// Guess the product name from the leading lines of OCR text.
#[wasm_bindgen]
pub fn extract_product_name(text: &str) -> String {
    expiry_core::extract_product_name(text)
}

/// Full scan of one label's OCR text.
///
/// Returns the scan outcome object (`product_name`, `detected_date`,
/// `date_kind`, `expiry_date`, `days_to_expiry`, `status`, `note`).
#[wasm_bindgen]
pub fn assess_scan(
    text: &str,
    today: Option<String>,
    shelf_life_months: Option<u32>,
) -> Result<JsValue, JsValue> {
    let now = reference_date(today)?;
    let policy = scan_policy(shelf_life_months);

    serde_wasm_bindgen::to_value(&assess(text, now, &policy))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn scan_policy(shelf_life_months: Option<u32>) -> ScanPolicy {
    let mut config = ExtractionConfig::default();
    if let Some(months) = shelf_life_months {
        config.shelf_life_months = months;
    }
    ScanPolicy::from(config)
}
