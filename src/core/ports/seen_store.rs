//! Seen-set store port
//!
//! Defines the interface for loading and persisting delivered identifiers.

use crate::core::models::SeenSet;

/// Durable storage for the seen-set
///
/// Implementations must treat missing or unreadable state as an empty set
/// (first run) rather than an error, and write the whole set on save.
pub trait SeenStore {
    /// Load the identifiers delivered by earlier runs
    fn load(&self) -> anyhow::Result<SeenSet>;

    /// Replace the persisted state with `seen`
    fn save(&self, seen: &SeenSet) -> anyhow::Result<()>;
}
