//! Run configuration
//!
//! Built once at startup from the environment and passed into the pipeline.
//! Only the webhook URL is required; everything else has an in-code default.
//!
//! | Variable              | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `DISCORD_WEBHOOK_URL` | Webhook to post to (required)             |
//! | `FORCE_SEND_TEST`     | `1`/`true`/`yes`/`on`: post a test message |
//! | `NOTICE_LIST_URL`     | Listing URL override (query allowed)      |
//! | `NOTICE_STATE_PATH`   | Seen-set file override                    |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::core::models::Board;
use crate::core::services::KeywordFilter;
use crate::core::services::notifier::DEFAULT_RETRY_AFTER;

/// Environment variable holding the webhook URL
pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";
/// Environment variable requesting a test message
pub const FORCE_SEND_VAR: &str = "FORCE_SEND_TEST";
/// Environment variable overriding the listing URL
pub const LIST_URL_VAR: &str = "NOTICE_LIST_URL";
/// Environment variable overriding the state file path
pub const STATE_PATH_VAR: &str = "NOTICE_STATE_PATH";

/// Listing page of the watched board
pub const DEFAULT_LIST_URL: &str = "https://www.smu.ac.kr/kor/life/notice.do";
/// Sent on every request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; noticewatch/0.1; +https://www.smu.ac.kr)";
/// Bound on every network call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
/// Seen-set file, relative to the working directory
pub const DEFAULT_STATE_PATH: &str = "state.json";
/// Most notices posted in one run
pub const MAX_SEND_PER_RUN: usize = 10;
/// Title keywords (regex, case-insensitive); empty posts everything
///
/// e.g. `["장학", "등록", "수강", "채용", "모집", "공모전", "대회", "행사"]`
pub const KEYWORDS: &[&str] = &[];
/// Pause between consecutive posts
pub const DELIVERY_DELAY: Duration = Duration::from_millis(600);

/// Errors that can occur while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The webhook URL variable is unset or blank
    #[error("environment variable {var} is not set")]
    MissingWebhookUrl {
        /// Variable name
        var: &'static str,
    },

    /// A URL variable does not parse
    #[error("environment variable {var} is not a valid URL: {source}")]
    InvalidUrl {
        /// Variable name
        var: &'static str,
        /// Parse failure
        source: url::ParseError,
    },

    /// A keyword pattern does not compile
    #[error("invalid keyword pattern: {0}")]
    InvalidKeyword(#[from] regex::Error),
}

/// Everything a run needs to know
#[derive(Debug, Clone)]
pub struct Config {
    /// Where notices are posted
    pub webhook_url: Url,
    /// Post a fixed test message before the run
    pub force_test: bool,
    /// The watched board
    pub board: Board,
    /// Seen-set file
    pub state_path: PathBuf,
    /// Most notices posted in one run
    pub max_per_run: usize,
    /// Title filter
    pub keywords: KeywordFilter,
    /// User agent sent on every request
    pub user_agent: String,
    /// Bound on every network call
    pub request_timeout: Duration,
    /// Pause between consecutive posts
    pub delivery_delay: Duration,
    /// Wait on a 429 without a usable `retry_after`
    pub rate_limit_fallback: Duration,
    /// Fetch detail pages for notices the listing shows without a title
    pub enrich_details: bool,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let webhook = var(WEBHOOK_URL_VAR).ok_or(ConfigError::MissingWebhookUrl {
            var: WEBHOOK_URL_VAR,
        })?;
        let webhook_url = Url::parse(&webhook).map_err(|source| ConfigError::InvalidUrl {
            var: WEBHOOK_URL_VAR,
            source,
        })?;

        let list_url = var(LIST_URL_VAR).unwrap_or_else(|| DEFAULT_LIST_URL.to_string());
        let board = Board::parse(&list_url).map_err(|source| ConfigError::InvalidUrl {
            var: LIST_URL_VAR,
            source,
        })?;

        let state_path = var(STATE_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_STATE_PATH), PathBuf::from);

        Ok(Self {
            webhook_url,
            force_test: var(FORCE_SEND_VAR).is_some_and(|v| is_truthy(&v)),
            board,
            state_path,
            max_per_run: MAX_SEND_PER_RUN,
            keywords: KeywordFilter::new(KEYWORDS)?,
            user_agent: USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            delivery_delay: DELIVERY_DELAY,
            rate_limit_fallback: DEFAULT_RETRY_AFTER,
            enrich_details: true,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
