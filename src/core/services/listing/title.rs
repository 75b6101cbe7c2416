//! Title cleanup
//!
//! Listing titles carry board chrome: the combined-notice-board label, often
//! bracketed, sometimes wrapping the real title in parentheses.

/// Label the board prepends to titles in its combined view
pub const BOARD_PREFIX: &str = "통합공지 게시판읽기";

/// Titles that are board navigation, never notices (compared after cleanup)
pub const EXCLUDED_TITLES: [&str; 6] = [
    "통합공지",
    "공지사항",
    "게시판읽기",
    "통합공지 게시판읽기",
    "목록",
    "글쓰기",
];

const BRACKETS: [(char, char); 3] = [('[', ']'), ('(', ')'), ('【', '】')];

/// Collapse every whitespace run to a single space and trim
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a raw listing title
///
/// Strips the board prefix (bare or bracketed, repeatedly), unwraps a single
/// enclosing pair of parentheses, then normalizes whitespace.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let mut text = collapse_whitespace(raw);
    while let Some(rest) = strip_board_prefix(&text) {
        text = rest.trim().to_string();
    }
    if let Some(inner) = unwrap_parentheses(&text) {
        text = inner.to_string();
    }
    collapse_whitespace(&text)
}

/// Whether a cleaned title is board chrome
#[must_use]
pub fn is_excluded(title: &str) -> bool {
    EXCLUDED_TITLES.contains(&title)
}

/// Whether a raw listing title is board chrome
///
/// Checked on the raw text as well as the cleaned one: a link labelled only
/// with the board prefix cleans down to nothing.
#[must_use]
pub fn is_board_chrome(raw: &str) -> bool {
    let raw = collapse_whitespace(raw);
    let cleaned = clean_title(&raw);
    is_excluded(&raw) || is_excluded(&cleaned) || (cleaned.is_empty() && !raw.is_empty())
}

fn strip_board_prefix(text: &str) -> Option<&str> {
    for (open, close) in BRACKETS {
        let rest = text
            .strip_prefix(open)
            .and_then(|r| r.trim_start().strip_prefix(BOARD_PREFIX))
            .and_then(|r| r.trim_start().strip_prefix(close));
        if rest.is_some() {
            return rest;
        }
    }
    text.strip_prefix(BOARD_PREFIX)
}

/// Inner text when the whole string is one balanced `( ... )` group
///
/// `(a) and (b)` is left alone: its first parenthesis closes early.
fn unwrap_parentheses(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => {},
        }
    }
    (depth == 0).then_some(inner)
}
