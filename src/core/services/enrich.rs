//! Detail-page enrichment for candidates the listing left untitled
//!
//! Sequential and failure tolerant: a detail page that cannot be fetched or
//! has no usable title leaves the candidate with a placeholder title.

use super::detail::extract_detail_title;
use crate::core::models::NoticeCandidate;
use crate::core::ports::PageFetcher;

/// Fill in titles for untitled candidates from their detail pages
///
/// Returns how many titles were found on detail pages.
pub fn enrich_titles<'a>(
    candidates: impl IntoIterator<Item = &'a mut NoticeCandidate>,
    fetcher: &dyn PageFetcher,
) -> usize {
    let mut enriched = 0;
    for candidate in candidates.into_iter().filter(|c| c.is_untitled()) {
        match fetcher.fetch(&candidate.url) {
            Ok(html) => {
                if let Some(title) = extract_detail_title(&html) {
                    log::debug!("{}: title from detail page: {title}", candidate.identifier);
                    candidate.title = title;
                    enriched += 1;
                } else {
                    log::debug!("{}: no title on detail page", candidate.identifier);
                }
            },
            Err(e) => log::warn!("{}: skipping detail page: {e}", candidate.identifier),
        }
    }
    enriched
}

/// Give every still-untitled candidate its placeholder title
pub fn fill_placeholders<'a>(candidates: impl IntoIterator<Item = &'a mut NoticeCandidate>) {
    for candidate in candidates.into_iter().filter(|c| c.is_untitled()) {
        candidate.title = candidate.placeholder_title();
    }
}
