//! Notifier - posts notices to the webhook with one-shot rate-limit retry

use std::time::Duration;

use serde_json::Value;

use super::message::format_notice;
use crate::core::models::NoticeCandidate;
use crate::core::ports::{NotifyError, Sleeper, WebhookClient, WebhookPayload, WebhookResponse};

/// Wait used when a 429 response carries no usable `retry_after`
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(2);

/// Posts messages through a [`WebhookClient`]
#[derive(Clone, Copy)]
pub struct Notifier<'a> {
    client: &'a dyn WebhookClient,
    sleeper: &'a dyn Sleeper,
    fallback_retry: Duration,
}

impl std::fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("fallback_retry", &self.fallback_retry)
            .finish_non_exhaustive()
    }
}

impl<'a> Notifier<'a> {
    /// Create a notifier with the default rate-limit fallback
    pub const fn new(client: &'a dyn WebhookClient, sleeper: &'a dyn Sleeper) -> Self {
        Self {
            client,
            sleeper,
            fallback_retry: DEFAULT_RETRY_AFTER,
        }
    }

    /// Override the wait used when `retry_after` is missing or malformed
    #[must_use]
    pub const fn with_fallback_retry(mut self, fallback: Duration) -> Self {
        self.fallback_retry = fallback;
        self
    }

    /// Post the formatted message for a notice
    pub fn deliver(&self, notice: &NoticeCandidate) -> Result<(), NotifyError> {
        self.send(format_notice(notice))
    }

    /// Post arbitrary message text
    ///
    /// A 429 is retried exactly once after the server-specified delay; a
    /// second 429 or any other non-2xx status is an error.
    pub fn send(&self, content: impl Into<String>) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            content: content.into(),
        };
        let first = self.client.post(&payload)?;
        if !first.is_rate_limited() {
            return into_result(first);
        }

        let wait = retry_after(&first.body).unwrap_or(self.fallback_retry);
        log::warn!("webhook rate limited, retrying in {:.2}s", wait.as_secs_f64());
        self.sleeper.sleep(wait);

        let second = self.client.post(&payload)?;
        if second.is_rate_limited() {
            let retry_after = retry_after(&second.body).unwrap_or(self.fallback_retry);
            return Err(NotifyError::RateLimited {
                retry_after: retry_after.as_secs_f64(),
            });
        }
        into_result(second)
    }
}

fn into_result(response: WebhookResponse) -> Result<(), NotifyError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(NotifyError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

/// `retry_after` (seconds) from a rate-limit response body
///
/// Accepts a JSON number or numeric string; anything else is `None`.
#[must_use]
pub fn retry_after(body: &str) -> Option<Duration> {
    let value: Value = serde_json::from_str(body).ok()?;
    let secs = match value.get("retry_after")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Duration::try_from_secs_f64(secs).ok()
}
