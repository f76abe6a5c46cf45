use std::time::Duration;

use tracing::debug;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Thin wrapper around [`reqwest::Client`] configured for the price feed.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            // Accept cookies so session-based redirects work
            .cookie_store(true)
            .build()?;

        Ok(Self { inner })
    }

    /// Fetch a URL as text. The feed is tried exactly once; transport
    /// failures and non-2xx statuses surface to the caller unchanged.
    pub async fn get_text(&self, url: &str) -> Result<String, FeedError> {
        debug!("GET {}", url);
        let resp = self.inner.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}
