//! File-based seen-set storage
//!
//! Implements `SeenStore` using a JSON file.

mod seen_store;

pub use seen_store::JsonSeenStore;
