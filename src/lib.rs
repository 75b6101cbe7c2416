//! noticewatch - watches a university notice board and forwards new notices
//! to a chat webhook
//!
//! This library provides the detection pipeline: a strategy cascade over the
//! board's drifting HTML, stable notice identities, a persisted seen-set and
//! an idempotent, rate-limit aware delivery gate.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{Pipeline, RunSummary};
