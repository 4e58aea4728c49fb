use serde::Deserialize;

/// Browser-like identification sent with every request. The trailing tag
/// identifies the tool to the scraped sites.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/123.0 Safari/537.36 (PanteraScrape/1.0)";

/// Main configuration structure for Pantera-Scrape
///
/// Every section and field is optional in the TOML file; missing values
/// fall back to the defaults observed against the live sites.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScrapeConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Constant User-Agent header sent on every attempt
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-attempt timeout in seconds; exceeding it counts as a
    /// transient failure subject to retry
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Retry behavior for transient fetch failures
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempts before the last error propagates
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the second attempt (milliseconds)
    #[serde(rename = "base-delay-ms", default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Factor applied to the delay after each failed attempt
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

/// In-memory cache capacities
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Fetched pages kept, keyed by exact URL
    #[serde(default = "default_page_capacity")]
    pub pages: usize,

    /// Area-code lookup results kept, keyed by DDD
    #[serde(default = "default_lookup_capacity")]
    pub lookups: usize,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1500
}

fn default_multiplier() -> f64 {
    2.0
}

fn default_page_capacity() -> usize {
    128
}

fn default_lookup_capacity() -> usize {
    64
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            multiplier: default_multiplier(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            pages: default_page_capacity(),
            lookups: default_lookup_capacity(),
        }
    }
}
