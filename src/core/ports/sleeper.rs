//! Sleeper port
//!
//! Blocking delays (rate-limit backoff, spacing between posts) go through
//! this trait so tests can record them instead of waiting.

use std::time::Duration;

/// Something that can block the current thread for a while
pub trait Sleeper {
    /// Block for `duration`
    fn sleep(&self, duration: Duration);
}
