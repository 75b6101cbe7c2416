//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that do I/O:
//!
//! - `http/` - Blocking `reqwest` client for the board and the webhook
//! - `file/` - JSON file seen-set storage
//! - `sleep` - Thread-sleeping `Sleeper`

pub mod file;
pub mod http;
pub mod sleep;

pub use file::JsonSeenStore;
pub use http::HttpClient;
pub use sleep::ThreadSleeper;
