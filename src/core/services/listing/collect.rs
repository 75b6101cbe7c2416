//! Per-strategy candidate collection
//!
//! Every strategy funnels its raw finds through a [`Collector`], which owns
//! the shared exclusion and dedup rules.

use std::collections::HashMap;

use url::Url;

use super::title::{clean_title, is_board_chrome};
use crate::core::models::{Board, NoticeCandidate};
use crate::core::services::identity::identify;

/// Accumulates candidates in page order, one per identifier
pub(super) struct Collector<'b> {
    board: &'b Board,
    index: HashMap<String, usize>,
    notices: Vec<NoticeCandidate>,
}

impl<'b> Collector<'b> {
    pub(super) fn new(board: &'b Board) -> Self {
        Self {
            board,
            index: HashMap::new(),
            notices: Vec::new(),
        }
    }

    /// Offer a raw find; returns true if it became a new candidate
    ///
    /// Off-board links, links back to the listing and chrome titles are
    /// dropped. A repeated identifier only fills in a title that was missing
    /// the first time (icon link before title link in the same row).
    pub(super) fn push(&mut self, raw_title: &str, url: &Url, posted_date: String) -> bool {
        if url.host_str() != self.board.list_url().host_str() {
            log::debug!("skipping off-board link {url}");
            return false;
        }
        if self.board.is_listing_page(url) {
            return false;
        }
        if is_board_chrome(raw_title) {
            log::debug!("skipping board chrome entry {raw_title:?}");
            return false;
        }
        let title = clean_title(raw_title);

        let url = url.to_string();
        let identifier = identify(&url);
        if let Some(&at) = self.index.get(&identifier) {
            let existing = &mut self.notices[at];
            if existing.is_untitled() && !title.is_empty() {
                existing.title = title;
            }
            if existing.posted_date.is_empty() && !posted_date.is_empty() {
                existing.posted_date = posted_date;
            }
            return false;
        }

        self.index.insert(identifier.clone(), self.notices.len());
        self.notices
            .push(NoticeCandidate::new(identifier, title, url, posted_date));
        true
    }

    pub(super) fn finish(self) -> Vec<NoticeCandidate> {
        self.notices
    }
}
