//! Cached DDD lookups

use tokio::sync::Mutex;

use crate::config::ScrapeConfig;
use crate::ddd::parser::{parse_area_code_page, AreaCodeLocation};
use crate::fetch::{Fetcher, LruCache};
use crate::Result;

/// Base URL of the blog serving the DDD pages
pub const CLARO_BLOG_BASE: &str = "https://www.claro.com.br";

/// Resolves area codes to locations, caching results per code
///
/// Failures are transport-only: a fetched page that no longer looks like
/// a DDD article still resolves, to an empty location.
#[derive(Debug)]
pub struct DddScraper {
    fetcher: Fetcher,
    base_url: String,
    cache: Mutex<LruCache<AreaCodeLocation>>,
}

impl DddScraper {
    /// Creates a scraper against the live blog
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        Self::with_base_url(config, CLARO_BLOG_BASE)
    }

    /// Creates a scraper against an alternate base URL (test servers)
    pub fn with_base_url(config: &ScrapeConfig, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Mutex::new(LruCache::new(config.cache.lookups)),
        })
    }

    /// Blog page URL for an area code
    pub fn page_url(&self, code: &str) -> String {
        format!("{}/blog/celular/ddd-{}", self.base_url, code)
    }

    /// Resolves an area code to its state and city list
    pub async fn lookup(&self, code: &str) -> Result<AreaCodeLocation> {
        if let Some(hit) = self.cache.lock().await.get(code) {
            tracing::debug!(code, "lookup cache hit");
            return Ok(hit);
        }

        let url = self.page_url(code);
        let html = self.fetcher.fetch(&url).await?;
        let location = parse_area_code_page(&html, &url);

        self.cache.lock().await.insert(code, location.clone());
        Ok(location)
    }
}
