//! Webhook port
//!
//! Defines the interface for posting messages to the chat webhook. The port
//! only moves bytes; status interpretation (rate limits, failures) lives in
//! the notifier service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Message text
    pub content: String,
}

/// Raw response from the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (JSON on rate limits, often empty on success)
    pub body: String,
}

impl WebhookResponse {
    /// Whether the webhook accepted the message (any 2xx)
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the webhook asked us to slow down (HTTP 429)
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Errors surfaced when a message could not be delivered
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response
    #[error("webhook request failed: {0}")]
    Transport(String),

    /// The webhook rejected the message
    #[error("webhook returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Still rate limited after the single retry
    #[error("webhook still rate limited after retrying (retry_after {retry_after}s)")]
    RateLimited {
        /// Delay the server asked for on the final attempt, in seconds
        retry_after: f64,
    },
}

/// Chat webhook transport
pub trait WebhookClient {
    /// POST a payload and return the raw response
    ///
    /// Only transport failures are errors; any HTTP status is returned as a
    /// [`WebhookResponse`].
    fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, NotifyError>;
}
