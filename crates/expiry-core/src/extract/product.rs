//! Product name guessing.
//!
//! Labels usually print the product name first and the date/lot block
//! below it, so the name is taken as the leading lines up to the first
//! line that carries a date or a date/lot keyword.

use super::patterns::PRODUCT_STOP_KEYWORD;
use super::scanner::looks_like_date;

/// Longest product name returned, in characters.
pub const PRODUCT_NAME_MAX_CHARS: usize = 100;

fn is_stop_line(line: &str) -> bool {
    PRODUCT_STOP_KEYWORD.is_match(line) || looks_like_date(line)
}

/// Guess the product name from raw OCR text.
///
/// Returns an empty string only when `text` has no non-blank line.
pub fn extract_product_name(text: &str) -> String {
    let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let Some(first_line) = lines.clone().next() else {
        return String::new();
    };

    let mut name = String::new();
    for line in lines {
        if is_stop_line(line) {
            break;
        }
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(line);
        if name.chars().count() >= PRODUCT_NAME_MAX_CHARS {
            break;
        }
    }

    if name.is_empty() {
        return first_line.to_string();
    }

    name.chars().take(PRODUCT_NAME_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_before_date_block() {
        let name = extract_product_name("FRESH MILK 2L\nEXP 12/11/2025\nLOT 12345");
        assert_eq!(name, "FRESH MILK 2L");
    }

    #[test]
    fn test_multiple_lines_joined() {
        let text = "\n  Organic  \r\nGreek Yogurt 500g\n\nBest Before 01/02/2026\n";
        assert_eq!(extract_product_name(text), "Organic Greek Yogurt 500g");
    }

    #[test]
    fn test_stops_at_bare_date_line() {
        assert_eq!(extract_product_name("Butter\n12.03.2026"), "Butter");
    }

    #[test]
    fn test_falls_back_to_first_line() {
        assert_eq!(
            extract_product_name("EXP 12/11/2025\nWHOLE MILK"),
            "EXP 12/11/2025"
        );
    }

    #[test]
    fn test_capped_length() {
        let long_line = "A".repeat(60);
        let text = format!("{long_line}\n{long_line}\n{long_line}");
        let name = extract_product_name(&text);
        assert_eq!(name.chars().count(), PRODUCT_NAME_MAX_CHARS);
        assert!(name.starts_with(&long_line));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_product_name(""), "");
        assert_eq!(extract_product_name(" \n\t\n"), "");
    }

    #[test]
    fn test_word_containing_keyword_is_kept() {
        assert_eq!(
            extract_product_name("Hand Lotion\nCabbage Soup\nBATCH 7"),
            "Hand Lotion Cabbage Soup"
        );
    }
}
