//! HLTV scraping for the FURIA team
//!
//! This module contains the page parsers for the HLTV statistics site,
//! the internal-link discoverer and the endpoint dispatch consumed by
//! the agent layer. Parsers are pure functions over HTML text: fields
//! are located by fixed structural selectors and every lookup tolerates
//! a missing element by substituting a default instead of failing. Only
//! transport failures surface as errors.

mod links;
mod match_page;
mod news;
mod overview;
mod records;
mod stats;
mod timestamp;
mod tool;

pub use links::discover_links;
pub use match_page::parse_match_summary;
pub use news::parse_news;
pub use overview::parse_team_overview;
pub use records::{
    MapStat, MatchSummary, NewsArticle, RecentResult, RosterEntry, TeamOverview, TeamStats,
    UpcomingMatch,
};
pub use stats::{parse_team_stats, TOP_MAPS_CAP};
pub use timestamp::parse_millis;
pub use tool::{Endpoint, HltvScraper, Record};

use scraper::{ElementRef, Html, Selector};

/// Site base used to absolutize internal links
pub const HLTV_BASE: &str = "https://www.hltv.org";

/// HLTV team id for FURIA
pub const TEAM_ID: u32 = 8297;

/// URL slug of the team pages
pub const TEAM_SLUG: &str = "furia";

/// Collected, trimmed text content of an element
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first element matching the selector, if any
pub(crate) fn select_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document.select(&sel).next().map(text_of)
}

/// Texts of every element matching the selector, in document order
pub(crate) fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Ok(sel) = Selector::parse(selector) else {
        return Vec::new();
    };
    document.select(&sel).map(text_of).collect()
}
