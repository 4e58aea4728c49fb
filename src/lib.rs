//! Pantera-Scrape: the scraping layer behind the Pantera chatbot tools
//!
//! This crate implements the fetch/parse pipelines used by two chatbot
//! automations: answering questions about the FURIA team from HLTV pages,
//! and resolving a Brazilian DDD (area code) to its state and city list
//! from the Claro blog.
//!
//! The crate is a library with no CLI of its own; an agent/orchestration
//! layer calls into [`hltv::HltvScraper`] and [`ddd::DddScraper`] and
//! serializes the returned records to JSON.

pub mod config;
pub mod ddd;
pub mod fetch;
pub mod hltv;

use thiserror::Error;

/// Main error type for Pantera-Scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport failure after the retry budget is exhausted. Covers
    /// connection errors, per-attempt timeouts and non-2xx responses.
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(reqwest::Error),

    /// A required URL parameter was not supplied for an endpoint that
    /// needs one. Fails immediately, never retried.
    #[error("URL required for endpoint {endpoint}")]
    MissingUrl { endpoint: &'static str },

    /// The requested endpoint name is not recognized.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Pantera-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ScrapeConfig;
pub use ddd::{AreaCodeLocation, DddScraper};
pub use fetch::Fetcher;
pub use hltv::{Endpoint, HltvScraper, Record};
