//! Delivery gate - decides which candidates get posted this run
//!
//! Pure logic: seen-set and keyword filtering, the per-run cap, and
//! oldest-first ordering.

use regex::{Regex, RegexBuilder};

use crate::core::models::{NoticeCandidate, SeenSet};

/// Case-insensitive title predicate; no patterns means accept everything
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    patterns: Vec<Regex>,
}

impl KeywordFilter {
    /// Filter that accepts every title
    #[must_use]
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Compile keyword patterns (regex syntax, case-insensitive)
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|p| RegexBuilder::new(p.as_ref()).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether no keywords are configured
    #[must_use]
    pub fn is_allow_all(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a title passes the filter
    #[must_use]
    pub fn accepts(&self, title: &str) -> bool {
        self.is_allow_all() || self.patterns.iter().any(|p| p.is_match(title))
    }
}

/// Pick the candidates to deliver, in delivery order
///
/// `candidates` is in page order (most recent first). Seen and
/// keyword-rejected candidates are dropped, the rest is cut to `max_batch`
/// keeping the most recent, then reversed so the oldest is posted first.
/// Anything past the cap is not returned and so never recorded as seen.
#[must_use]
pub fn select(
    candidates: impl IntoIterator<Item = NoticeCandidate>,
    seen: &SeenSet,
    keywords: &KeywordFilter,
    max_batch: usize,
) -> Vec<NoticeCandidate> {
    let mut batch: Vec<NoticeCandidate> = candidates
        .into_iter()
        .filter(|c| !seen.contains(&c.identifier))
        .filter(|c| keywords.accepts(&c.title))
        .take(max_batch)
        .collect();
    batch.reverse();
    batch
}
