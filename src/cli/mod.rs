//! CLI layer for noticewatch
//!
//! - [`app`] - CLI definition and entry point

pub mod app;

// Re-export main entry point
pub use app::run;
