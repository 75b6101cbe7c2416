//! Core logic for noticewatch
//!
//! Everything here is free of concrete I/O. The network and the state file
//! are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`NoticeCandidate`, `SeenSet`, `Board`)
//! - `services/` - Parsing, identity, gating, notification logic
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
