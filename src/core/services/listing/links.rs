//! Link-pattern strategy: anything that leads to a detail page
//!
//! Ignores the surrounding layout. An element qualifies if its `href` has
//! the detail shape (`mode=view` plus a numeric `articleNo`) or it embeds an
//! article number in an inline handler, in which case the detail URL is
//! synthesized.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use url::Url;

use super::collect::Collector;
use super::{Page, compile, date, element_text, first_match, link_text, synthesized_target};
use crate::core::models::{Board, NoticeCandidate};

static LINK_LIKE: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["a, [onclick]"]));

static ANCHORS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["a"]));

static INNER_TITLES: LazyLock<Vec<Selector>> =
    LazyLock::new(|| compile(&[".title", ".tit", ".subject", "strong"]));

/// Ancestors treated as the "block" a link belongs to when looking for a date
const BLOCK_TAGS: [&str; 5] = ["tr", "li", "dd", "article", "dl"];

pub(super) fn extract(page: &Page<'_>, board: &Board) -> Vec<NoticeCandidate> {
    let mut out = Collector::new(board);
    for selector in LINK_LIKE.iter() {
        for el in page.dom().select(selector) {
            let is_anchor = el.value().name() == "a";
            // Clickable containers whose own anchors lead somewhere are visited through them.
            if !is_anchor && anchors(el).any(|a| detail_target(a, board).is_some()) {
                continue;
            }
            let Some(url) = detail_target(el, board) else {
                continue;
            };
            let title = if is_anchor {
                link_text(el)
            } else {
                container_title(el)
            };
            let posted = enclosing_block(el).map(date::date_in).unwrap_or_default();
            out.push(&title, &url, posted);
        }
    }
    out.finish()
}

fn anchors<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    ANCHORS.iter().flat_map(move |s| el.select(s))
}

/// Title of a clickable container: a title-like child, its placeholder
/// anchor's text, or all of its text
fn container_title(el: ElementRef<'_>) -> String {
    first_match(el, &INNER_TITLES)
        .map(element_text)
        .or_else(|| anchors(el).map(link_text).find(|t| !t.is_empty()))
        .unwrap_or_else(|| element_text(el))
}

fn detail_target(el: ElementRef<'_>, board: &Board) -> Option<Url> {
    let href = el.value().attr("href").and_then(|h| board.resolve(h));
    if let Some(url) = href.filter(Board::is_detail_link) {
        return Some(url);
    }
    synthesized_target(el, board)
}

/// The element itself when it is a block, else its nearest block ancestor
fn enclosing_block(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find(|a| BLOCK_TAGS.contains(&a.value().name()))
        .or_else(|| el.parent().and_then(ElementRef::wrap))
}
