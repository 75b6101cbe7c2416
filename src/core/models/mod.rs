//! Domain models for noticewatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NoticeCandidate`] - A notice seen on the listing during this run
//! - [`DeliveryRecord`] - A candidate plus what happened when it was posted
//! - [`SeenSet`] - Identifiers already delivered in earlier runs
//! - [`Board`] - The watched board's listing and detail URL shapes

mod board;
mod notice;
mod seen;

pub use board::{ARTICLE_PARAM, Board};
pub use notice::{DeliveryOutcome, DeliveryRecord, NoticeCandidate};
pub use seen::SeenSet;
