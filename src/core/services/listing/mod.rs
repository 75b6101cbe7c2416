//! List parser - turns listing HTML into notice candidates
//!
//! The board's markup drifts between a table, a card list, script-driven
//! rows and bare article-number links. Rather than committing to one shape,
//! [`parse_listing`] runs a fixed cascade of [`Strategy`] functions and keeps
//! the first non-empty result:
//!
//! 1. [`Strategy::TableRows`] - rows of a tabular board
//! 2. [`Strategy::Cards`] - list items / cards
//! 3. [`Strategy::LinkPattern`] - any element linking to a detail page,
//!    including `onclick` handlers carrying the article number
//! 4. [`Strategy::RawText`] - regex scan of the markup, no DOM
//!
//! Candidates come out in page order (most recent first) and are unique by
//! identifier within a strategy.

mod cards;
mod collect;
mod date;
mod links;
mod raw_text;
mod rows;
mod title;

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub use date::find_date;
pub use title::{
    BOARD_PREFIX, EXCLUDED_TITLES, clean_title, collapse_whitespace, is_board_chrome, is_excluded,
};

use crate::core::models::{Board, NoticeCandidate};

/// Attributes that may carry an article number out of band
const ID_ATTRIBUTES: [&str; 4] = ["onclick", "data-article-no", "data-articleno", "data-no"];

static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,}").expect("numeric literal pattern is valid"));

/// A listing page, raw and parsed
#[derive(Debug)]
pub struct Page<'h> {
    raw: &'h str,
    dom: Html,
}

impl<'h> Page<'h> {
    /// Parse listing HTML once for all strategies
    #[must_use]
    pub fn parse(raw: &'h str) -> Self {
        Self {
            raw,
            dom: Html::parse_document(raw),
        }
    }

    /// The unparsed markup
    #[must_use]
    pub const fn raw(&self) -> &'h str {
        self.raw
    }

    /// The parsed document
    #[must_use]
    pub const fn dom(&self) -> &Html {
        &self.dom
    }
}

/// One way of reading the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Rows of a tabular board
    TableRows,
    /// List items or cards
    Cards,
    /// Elements whose target looks like a detail page
    LinkPattern,
    /// Regex scan of the raw markup
    RawText,
}

impl Strategy {
    /// Strategies in the order they are tried
    pub const CASCADE: [Self; 4] = [Self::TableRows, Self::Cards, Self::LinkPattern, Self::RawText];

    /// Run this strategy against a page
    #[must_use]
    pub fn extract(self, page: &Page<'_>, board: &Board) -> Vec<NoticeCandidate> {
        match self {
            Self::TableRows => rows::extract(page, board),
            Self::Cards => cards::extract(page, board),
            Self::LinkPattern => links::extract(page, board),
            Self::RawText => raw_text::extract(page, board),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableRows => write!(f, "table-rows"),
            Self::Cards => write!(f, "cards"),
            Self::LinkPattern => write!(f, "link-pattern"),
            Self::RawText => write!(f, "raw-text"),
        }
    }
}

/// Result of parsing a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Strategy that produced the notices, `None` if every strategy came up empty
    pub strategy: Option<Strategy>,
    /// Candidates in page order
    pub notices: Vec<NoticeCandidate>,
}

/// Parse a listing page with the strategy cascade
#[must_use]
pub fn parse_listing(html: &str, board: &Board) -> Listing {
    let page = Page::parse(html);
    for strategy in Strategy::CASCADE {
        let notices = strategy.extract(&page, board);
        if notices.is_empty() {
            log::debug!("{strategy} strategy found nothing");
            continue;
        }
        log::debug!("{strategy} strategy found {} notice(s)", notices.len());
        return Listing {
            strategy: Some(strategy),
            notices,
        };
    }
    Listing {
        strategy: None,
        notices: Vec::new(),
    }
}

/// Parse a listing page, keeping only the candidates
#[must_use]
pub fn parse_list(html: &str, board: &Board) -> Vec<NoticeCandidate> {
    parse_listing(html, board).notices
}

/// Compile selectors, silently dropping any that do not parse
pub(crate) fn compile(css: &[&str]) -> Vec<Selector> {
    css.iter().filter_map(|c| Selector::parse(c).ok()).collect()
}

/// First descendant matching the highest-priority selector that matches at all
pub(crate) fn first_match<'a>(scope: ElementRef<'a>, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors.iter().find_map(|s| scope.select(s).next())
}

/// Whitespace-normalized text content of an element
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<String>())
}

/// Visible text of a link, or its `title` attribute when it has none
fn link_text(el: ElementRef<'_>) -> String {
    let text = element_text(el);
    if text.is_empty() {
        el.value().attr("title").map(collapse_whitespace).unwrap_or_default()
    } else {
        text
    }
}

/// Article number embedded in an inline handler or data attribute
///
/// `jf_viewArtcl('kor', '759631')` yields `759631`: the longest run of three
/// or more digits, first one on ties.
fn embedded_article_no(el: ElementRef<'_>) -> Option<String> {
    ID_ATTRIBUTES.iter().find_map(|&attr| {
        let value = el.value().attr(attr)?;
        NUMERIC_LITERAL
            .find_iter(value)
            .fold(None, |best: Option<regex::Match<'_>>, m| match best {
                Some(b) if b.as_str().len() >= m.as_str().len() => Some(b),
                _ => Some(m),
            })
            .map(|m| m.as_str().to_string())
    })
}

/// Detail URL built from an article number embedded in `el`
fn synthesized_target(el: ElementRef<'_>, board: &Board) -> Option<Url> {
    embedded_article_no(el).and_then(|no| Url::parse(&board.detail_url(&no)).ok())
}

/// Where a link-like element leads
///
/// A usable `href` wins; placeholder links (`#`, `javascript:`, or ones that
/// point back at the listing) fall back to a detail URL synthesized from an
/// embedded article number.
fn link_target(el: ElementRef<'_>, board: &Board) -> Option<Url> {
    el.value()
        .attr("href")
        .and_then(|h| board.resolve(h))
        .filter(|url| !board.is_listing_page(url))
        .or_else(|| synthesized_target(el, board))
}

/// Which link targets a block may contribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Targets {
    /// Any same-board page (board-specific containers)
    AnyOnBoard,
    /// Only detail-shaped links (generic containers such as layout tables)
    DetailOnly,
}

/// Candidates from a list of block elements (rows or cards)
///
/// A block whose link is a placeholder can still carry the article number
/// itself, as in `<tr onclick="jf_viewArtcl('kor', '759631')">`.
fn collect_blocks<'a>(
    blocks: impl IntoIterator<Item = ElementRef<'a>>,
    board: &Board,
    links: &[Selector],
    titles: &[Selector],
    targets: Targets,
) -> Vec<NoticeCandidate> {
    let mut out = collect::Collector::new(board);
    for block in blocks {
        let Some(link) = first_match(block, links) else {
            continue;
        };
        let Some(url) = link_target(link, board).or_else(|| synthesized_target(block, board)) else {
            continue;
        };
        if targets == Targets::DetailOnly && !Board::is_detail_link(&url) {
            log::debug!("skipping non-detail link {url} in generic block");
            continue;
        }
        let title = first_match(block, titles)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| link_text(link));
        out.push(&title, &url, date::date_in(block));
    }
    out.finish()
}
