//! Blocking HTTP adapter
//!
//! One `reqwest` blocking client, configured with the fixed user agent and
//! per-request timeout, serves both the page fetcher and the webhook port.

use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::core::ports::{
    FetchError, NotifyError, PageFetcher, WebhookClient, WebhookPayload, WebhookResponse,
};

/// HTTP client for the board and the webhook
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    webhook_url: Url,
}

impl HttpClient {
    /// Build a client from the run configuration
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
        })
    }
}

impl PageFetcher for HttpClient {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };
        log::debug!("GET {url}");
        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}

impl WebhookClient for HttpClient {
    fn post(&self, payload: &WebhookPayload) -> Result<WebhookResponse, NotifyError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(payload)
            .send()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Ok(WebhookResponse { status, body })
    }
}
