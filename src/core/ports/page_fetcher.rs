//! Page fetcher port
//!
//! Defines the interface for downloading listing and detail pages.

use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error text
        message: String,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },
}

/// Source of raw HTML pages
///
/// Every call is blocking and bounded by the implementation's per-request
/// timeout.
pub trait PageFetcher {
    /// GET a page and return its body as text
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
