//! Raw-text-scan strategy: regex over the markup, no DOM
//!
//! Last resort for pages where the parser sees nothing useful (markup built
//! in script strings, broken nesting). Any substring shaped like a detail
//! URL counts; anchor text is picked up when the URL sits in an `href`, and
//! the date is the first date pattern in the markup that follows the URL,
//! up to the next detail URL.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use super::collect::Collector;
use super::{Page, collapse_whitespace, find_date};
use crate::core::models::{Board, NoticeCandidate};

static DETAIL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^"'\s<>()]*articleNo=(\d+)[^"'\s<>()]*"#).expect("detail url pattern is valid")
});

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a>"#)
        .expect("anchor pattern is valid")
});

/// Bytes of markup after a detail URL searched for its date
const DATE_WINDOW: usize = 400;

pub(super) fn extract(page: &Page<'_>, board: &Board) -> Vec<NoticeCandidate> {
    let raw = page.raw();
    let titles = anchor_titles(raw);
    let finds: Vec<_> = DETAIL_URL
        .captures_iter(raw)
        .filter_map(|caps| Some((caps.get(0)?, caps.get(1)?)))
        .collect();
    let mut out = Collector::new(board);
    for (i, (whole, no)) in finds.iter().enumerate() {
        if !whole.as_str().contains("mode=view") {
            continue;
        }
        let Ok(url) = Url::parse(&board.detail_url(no.as_str())) else {
            continue;
        };
        let title = titles.get(no.as_str()).map_or("", String::as_str);
        let next = finds.get(i + 1).map_or(raw.len(), |(m, _)| m.start());
        out.push(title, &url, date_after(raw, whole.end(), next));
    }
    out.finish()
}

/// First date in `raw[from..until]`, looking at most [`DATE_WINDOW`] bytes ahead
fn date_after(raw: &str, from: usize, until: usize) -> String {
    let mut end = until.min(from + DATE_WINDOW);
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    raw.get(from..end)
        .and_then(find_date)
        .unwrap_or_default()
}

/// Text of the first anchor whose `href` carries each article number
fn anchor_titles(raw: &str) -> HashMap<String, String> {
    let mut titles = HashMap::new();
    for caps in ANCHOR.captures_iter(raw) {
        let (Some(href), Some(inner)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(no) = DETAIL_URL
            .captures(href.as_str())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
        else {
            continue;
        };
        let text = fragment_text(inner.as_str());
        if !text.is_empty() {
            titles.entry(no).or_insert(text);
        }
    }
    titles
}

/// Entity-decoded, tag-free text of a markup fragment
fn fragment_text(fragment: &str) -> String {
    let parsed = Html::parse_fragment(fragment);
    collapse_whitespace(&parsed.root_element().text().collect::<String>())
}
