//! List/card strategy: one notice per list item or card

use std::sync::LazyLock;

use scraper::Selector;

use super::{Page, Targets, collect_blocks, compile};
use crate::core::models::{Board, NoticeCandidate};

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    compile(&[
        "ul.board-list > li",
        "div.board-list .board-item",
        "ul.board-thumb-wrap > li",
        ".board-list-wrap li",
        ".notice-list > li",
    ])
});

static LINKS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile(&["a.title", ".title a", "a"]));

static TITLES: LazyLock<Vec<Selector>> =
    LazyLock::new(|| compile(&[".title", ".tit", ".subject", "strong"]));

/// Containers of the first container selector that matches anything
pub(super) fn extract(page: &Page<'_>, board: &Board) -> Vec<NoticeCandidate> {
    let cards = CONTAINERS
        .iter()
        .map(|s| page.dom().select(s).collect::<Vec<_>>())
        .find(|cards| !cards.is_empty())
        .unwrap_or_default();
    collect_blocks(cards, board, &LINKS, &TITLES, Targets::AnyOnBoard)
}
