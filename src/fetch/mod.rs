//! HTTP fetching with retry and in-memory caching
//!
//! This module owns all network access for the scrapers:
//! - Building the HTTP client with the identifying user agent
//! - GET requests with per-attempt timeouts
//! - Exponential-backoff retry on transient failures
//! - A bounded LRU cache of successful responses, keyed by exact URL
//!
//! A URL that has been fetched successfully is never requested again for
//! the lifetime of the cache entry; repeated fetches return the identical
//! text.

mod cache;
mod retry;

pub use cache::LruCache;
pub use retry::RetryPolicy;

use crate::config::{HttpConfig, ScrapeConfig};
use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;

/// Builds an HTTP client with the configured identification and timeout
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Cached, retrying page fetcher
///
/// One `Fetcher` is constructed per process and shared by the scrapers.
/// The response cache sits behind a mutex so concurrent tasks keep the
/// at-most-one-entry-per-key invariant.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    policy: RetryPolicy,
    cache: Mutex<LruCache<String>>,
}

impl Fetcher {
    /// Creates a fetcher from the full configuration
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = build_http_client(&config.http).map_err(ScrapeError::Client)?;
        Ok(Self {
            client,
            policy: RetryPolicy::from_config(&config.retry),
            cache: Mutex::new(LruCache::new(config.cache.pages)),
        })
    }

    /// Fetches a page, serving from cache when possible
    ///
    /// On a cache miss the URL is requested with retry; only a 2xx
    /// response body is cached. After the retry budget is exhausted the
    /// last transport error propagates as [`ScrapeError::Http`].
    pub async fn fetch(&self, url: &str) -> Result<String> {
        if let Some(body) = self.cache.lock().await.get(url) {
            tracing::debug!(url, "page cache hit");
            return Ok(body);
        }

        let body = self.fetch_with_retry(url).await?;
        self.cache.lock().await.insert(url, body.clone());
        Ok(body)
    }

    /// Issues GET attempts until one succeeds or the budget is spent
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_fetch(url).await {
                Ok(body) => {
                    tracing::debug!(url, attempt, "fetched {} bytes", body.len());
                    return Ok(body);
                }
                Err(source) if !self.policy.is_last_attempt(attempt) => {
                    let delay = self.policy.delay_after(attempt);
                    tracing::warn!(
                        url,
                        attempt,
                        "fetch attempt failed ({}), retrying in {:?}",
                        source,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(source) => {
                    tracing::error!(url, attempt, "fetch failed, retries exhausted: {}", source);
                    return Err(ScrapeError::Http {
                        url: url.to_string(),
                        source,
                    });
                }
            }
        }
    }

    /// One GET attempt; a non-2xx status is an error like any transport
    /// failure
    async fn try_fetch(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.text().await
    }

    /// Number of cached pages, for instrumentation
    pub async fn cached_pages(&self) -> usize {
        self.cache.lock().await.len()
    }
}
