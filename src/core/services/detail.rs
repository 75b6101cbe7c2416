//! Detail page title extraction
//!
//! Some listing variants expose only article numbers. For those, the title
//! is read off the detail page, trying increasingly generic locations and
//! rejecting known boilerplate (site name, section labels, calendar widgets).

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::listing::{clean_title, compile, element_text, is_excluded};

/// Strings that show up in title slots but never name a notice
pub const TITLE_DENYLIST: [&str; 7] = [
    "calendar",
    "캘린더",
    "학사일정",
    "통합공지",
    "공지사항",
    "상명대학교",
    "sangmyung university",
];

/// Field labels that mark the title row in table/definition layouts
const TITLE_LABELS: [&str; 3] = ["제목", "title", "subject"];

static META_TITLES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        r#"meta[property="og:title"]"#,
        r#"meta[name="og:title"]"#,
        r#"meta[name="title"]"#,
    ])
});

static LABEL_CELLS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["th", "dt"]));

static CONTENT_TITLES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        ".artclViewTitle",
        ".view-title",
        ".board-view-title",
        ".b-title-box",
        ".bbs-view-title",
        "h2.title",
        "h3.title",
        ".subject",
    ])
});

static PAGE_TITLE: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["title"]));

static TITLE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(?:\||-|::|>|»|·|/)\s+").expect("separator pattern is valid")
});

/// Best title found on a detail page, if any
#[must_use]
pub fn extract_detail_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    meta_title(&doc)
        .or_else(|| labeled_title(&doc))
        .or_else(|| content_title(&doc))
        .or_else(|| page_title(&doc))
}

/// Cleaned title, or `None` when empty or boilerplate
fn accept(raw: &str) -> Option<String> {
    let title = clean_title(raw);
    let lower = title.to_lowercase();
    let denied = TITLE_DENYLIST.iter().any(|d| lower == *d) || is_excluded(&title);
    (!title.is_empty() && !denied).then_some(title)
}

fn meta_title(doc: &Html) -> Option<String> {
    META_TITLES
        .iter()
        .flat_map(|s| doc.select(s))
        .filter_map(|m| m.value().attr("content"))
        .find_map(accept)
}

fn labeled_title(doc: &Html) -> Option<String> {
    LABEL_CELLS
        .iter()
        .flat_map(|s| doc.select(s))
        .filter(|cell| {
            let label = element_text(*cell).to_lowercase();
            TITLE_LABELS.contains(&label.as_str())
        })
        .filter_map(|cell| cell.next_siblings().find_map(ElementRef::wrap))
        .find_map(|value| accept(&element_text(value)))
}

fn content_title(doc: &Html) -> Option<String> {
    CONTENT_TITLES
        .iter()
        .flat_map(|s| doc.select(s))
        .find_map(|el| accept(&element_text(el)))
}

/// `<title>` split on separators, longest acceptable fragment
fn page_title(doc: &Html) -> Option<String> {
    let title = PAGE_TITLE.iter().find_map(|s| doc.select(s).next())?;
    let text = element_text(title);
    TITLE_SEPARATORS
        .split(&text)
        .filter_map(accept)
        .fold(None, |best: Option<String>, t| match best {
            Some(b) if b.chars().count() >= t.chars().count() => Some(b),
            _ => Some(t),
        })
}
