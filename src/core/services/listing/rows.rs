//! Structured-row strategy: one notice per table row

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::{Page, Targets, collect_blocks, compile};
use crate::core::models::{Board, NoticeCandidate};

static ROWS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        "table.board-list tbody tr",
        "table.board-table tbody tr",
        "div.board-list table tbody tr",
    ])
});

/// Any table at all; only detail-shaped links count here
static GENERIC_ROWS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["table tbody tr"]));

static LINKS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        "td.td-subject a",
        "td.subject a",
        "td.title a",
        ".b-title-box a",
        "td a",
    ])
});

static TITLES: LazyLock<Vec<Selector>> =
    LazyLock::new(|| compile(&["td.td-subject a strong", ".b-title-box a strong"]));

/// Rows of the first board row selector that matches anything
///
/// Without a recognizable board table, every table row is tried, but only
/// for links to detail pages: layout tables (calendars, sidebars) link to
/// other pages on the same site.
pub(super) fn extract(page: &Page<'_>, board: &Board) -> Vec<NoticeCandidate> {
    if let Some(rows) = first_rows(page, &ROWS) {
        return collect_blocks(rows, board, &LINKS, &TITLES, Targets::AnyOnBoard);
    }
    let rows = first_rows(page, &GENERIC_ROWS).unwrap_or_default();
    collect_blocks(rows, board, &LINKS, &TITLES, Targets::DetailOnly)
}

fn first_rows<'p>(page: &'p Page<'_>, selectors: &[Selector]) -> Option<Vec<ElementRef<'p>>> {
    selectors
        .iter()
        .map(|s| page.dom().select(s).collect::<Vec<_>>())
        .find(|rows| !rows.is_empty())
}
