//! Seen-set model
//!
//! The durable record of notice identifiers that were already delivered.
//! Backed by a `BTreeSet` so iteration (and therefore the persisted form)
//! is always in sorted order.

use std::collections::BTreeSet;

/// Identifiers of notices that were already delivered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    ids: BTreeSet<String>,
}

impl SeenSet {
    /// Create an empty seen-set (first run)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an identifier was already delivered
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.ids.contains(identifier)
    }

    /// Record an identifier, returns false if it was already present
    pub fn insert(&mut self, identifier: impl Into<String>) -> bool {
        self.ids.insert(identifier.into())
    }

    /// Number of recorded identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SeenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
