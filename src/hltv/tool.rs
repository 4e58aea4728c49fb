//! Endpoint dispatch consumed by the agent layer
//!
//! The agent requests a page kind by name and receives one tagged,
//! JSON-serializable record. A missing required URL and an unrecognized
//! endpoint fail immediately without touching the network.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ScrapeConfig;
use crate::fetch::Fetcher;
use crate::hltv::records::{MatchSummary, NewsArticle, TeamOverview, TeamStats};
use crate::hltv::{links, match_page, news, overview, stats};
use crate::hltv::{HLTV_BASE, TEAM_ID, TEAM_SLUG};
use crate::{Result, ScrapeError};

/// Page kinds the agent layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TeamOverview,
    TeamStats,
    MatchSummary,
    News,
}

impl FromStr for Endpoint {
    type Err = ScrapeError;

    /// Accepts the endpoint names and the historical aliases
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "team_overview" => Ok(Self::TeamOverview),
            "stats_team" | "team_stats" => Ok(Self::TeamStats),
            "match_summary" | "match_page" => Ok(Self::MatchSummary),
            "news" => Ok(Self::News),
            other => Err(ScrapeError::UnknownEndpoint(other.to_string())),
        }
    }
}

/// One parsed record, tagged by page kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    TeamOverview(TeamOverview),
    TeamStats(TeamStats),
    MatchSummary(MatchSummary),
    News(NewsArticle),
}

/// Scraper for the HLTV pages of the FURIA team
///
/// Owns the cached fetcher; all methods go through it, so a page is
/// downloaded at most once per cache lifetime regardless of which
/// endpoint asked for it.
#[derive(Debug)]
pub struct HltvScraper {
    fetcher: Fetcher,
    base_url: String,
}

impl HltvScraper {
    /// Creates a scraper against the live site
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        Self::with_base_url(config, HLTV_BASE)
    }

    /// Creates a scraper against an alternate base URL (test servers)
    pub fn with_base_url(config: &ScrapeConfig, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Canonical team page URL
    pub fn team_url(&self) -> String {
        format!("{}/team/{}/{}", self.base_url, TEAM_ID, TEAM_SLUG)
    }

    /// Canonical team stats page URL
    pub fn stats_url(&self) -> String {
        format!("{}/stats/teams/{}/{}", self.base_url, TEAM_ID, TEAM_SLUG)
    }

    /// Fetches and parses the team overview page
    pub async fn team_overview(&self) -> Result<TeamOverview> {
        let url = self.team_url();
        let html = self.fetcher.fetch(&url).await?;
        Ok(overview::parse_team_overview(&html, &url))
    }

    /// Fetches and parses the team stats page
    pub async fn team_stats(&self) -> Result<TeamStats> {
        let url = self.stats_url();
        let html = self.fetcher.fetch(&url).await?;
        Ok(stats::parse_team_stats(&html, &url))
    }

    /// Fetches and parses a specific match page
    pub async fn match_summary(&self, url: &str) -> Result<MatchSummary> {
        let html = self.fetcher.fetch(url).await?;
        Ok(match_page::parse_match_summary(&html, url))
    }

    /// Fetches and parses a news article
    pub async fn news(&self, url: &str) -> Result<NewsArticle> {
        let html = self.fetcher.fetch(url).await?;
        Ok(news::parse_news(&html, url))
    }

    /// Fetches a page and discovers allow-listed internal links on it
    pub async fn discover(&self, url: &str) -> Result<HashSet<String>> {
        let html = self.fetcher.fetch(url).await?;
        Ok(links::discover_links(&html))
    }

    /// Dispatches an endpoint request by name
    ///
    /// `match_summary` and `news` require a URL; the team pages ignore
    /// the parameter and use the canonical URLs.
    pub async fn run(&self, endpoint: &str, url: Option<&str>) -> Result<Record> {
        match endpoint.parse::<Endpoint>()? {
            Endpoint::TeamOverview => Ok(Record::TeamOverview(self.team_overview().await?)),
            Endpoint::TeamStats => Ok(Record::TeamStats(self.team_stats().await?)),
            Endpoint::MatchSummary => {
                let url = url.ok_or(ScrapeError::MissingUrl {
                    endpoint: "match_summary",
                })?;
                Ok(Record::MatchSummary(self.match_summary(url).await?))
            }
            Endpoint::News => {
                let url = url.ok_or(ScrapeError::MissingUrl { endpoint: "news" })?;
                Ok(Record::News(self.news(url).await?))
            }
        }
    }
}
