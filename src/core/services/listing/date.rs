//! Posting date extraction
//!
//! Dates are best effort: a labeled date element inside the row/container
//! wins, then a `YYYY.MM.DD`-style pattern anywhere in the block. A miss is
//! an empty string.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::{compile, element_text, first_match};

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}\s*[./-]\s*\d{1,2}\s*[./-]\s*\d{1,2}").expect("date pattern is valid")
});

static DATE_LABELS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        "time",
        ".date",
        ".regdate",
        ".td-date",
        ".b-date",
        "[class*=\"date\"]",
    ])
});

/// First `YYYY sep MM sep DD` substring in free text (separator `.`, `-` or `/`)
#[must_use]
pub fn find_date(text: &str) -> Option<String> {
    DATE_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Date for a row, card or other enclosing block
pub(super) fn date_in(block: ElementRef<'_>) -> String {
    if let Some(label) = first_match(block, &DATE_LABELS) {
        let text = element_text(label);
        if let Some(date) = find_date(&text) {
            return date;
        }
        if !text.is_empty() {
            return text;
        }
    }
    find_date(&element_text(block)).unwrap_or_default()
}
