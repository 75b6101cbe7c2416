//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the outside
//! world (the notice board, the chat webhook, the state file, the clock).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core logic depends only on these traits, never on concrete
//! implementations. Tests drive the whole pipeline with in-memory mocks.

mod page_fetcher;
mod seen_store;
mod sleeper;
mod webhook;

pub use page_fetcher::{FetchError, PageFetcher};
pub use seen_store::SeenStore;
pub use sleeper::Sleeper;
pub use webhook::{NotifyError, WebhookClient, WebhookPayload, WebhookResponse};
