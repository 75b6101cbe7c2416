//! Notice model
//!
//! A notice candidate is one row of the listing page as seen during the
//! current run. Candidates are never persisted; only their identifiers are.

use serde::{Deserialize, Serialize};

/// A notice discovered on the listing page during this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeCandidate {
    /// Stable key derived from the detail URL (e.g. `articleNo:759631`)
    pub identifier: String,

    /// Human-readable title, possibly empty when the listing has no inline title
    pub title: String,

    /// Absolute URL of the detail page
    pub url: String,

    /// Best-effort posting date as printed on the board, empty when unknown
    pub posted_date: String,
}

impl NoticeCandidate {
    /// Create a candidate from already-extracted parts
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        posted_date: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            url: url.into(),
            posted_date: posted_date.into(),
        }
    }

    /// Whether the listing gave us no usable title for this notice
    #[must_use]
    pub fn is_untitled(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Title used when neither the listing nor the detail page yields one
    ///
    /// `articleNo:123` becomes `articleNo 123`; hash identifiers are shown as-is.
    #[must_use]
    pub fn placeholder_title(&self) -> String {
        match self.identifier.split_once(':') {
            Some((param, value)) if param != "hash" => format!("{param} {value}"),
            _ => self.identifier.clone(),
        }
    }
}

/// Outcome of posting a single notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The webhook accepted the message
    Delivered,
    /// The webhook rejected the message or could not be reached
    Failed(String),
}

/// A notice together with what happened when we tried to post it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    /// The notice that was posted
    pub notice: NoticeCandidate,
    /// Result of the post
    pub outcome: DeliveryOutcome,
}

impl DeliveryRecord {
    /// Whether the notice should be recorded as seen
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self.outcome, DeliveryOutcome::Delivered)
    }
}
