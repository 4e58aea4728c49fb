//! Value records extracted from HLTV pages
//!
//! Each record is produced fresh per parse call and never mutated after
//! construction. Serialized field names match the JSON shape the agent
//! layer consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Roster, upcoming matches and recent results from the team page
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TeamOverview {
    pub roster: Vec<RosterEntry>,
    pub next_matches: Vec<UpcomingMatch>,
    pub recent_results: Vec<RecentResult>,
    pub source: String,
}

/// One player on the active roster
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RosterEntry {
    pub nickname: String,
    /// Country name from the flag icon; empty when the flag is missing
    pub country: String,
}

/// A scheduled match from the team page's upcoming list
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct UpcomingMatch {
    pub opponent: String,
    pub event: String,
    /// Match start decoded from the page's millisecond timestamp
    #[serde(rename = "datetime_utc")]
    pub time: Option<DateTime<Utc>>,
    pub url: String,
}

/// A finished match from the team page's results list
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RecentResult {
    pub score: String,
    pub opponent: String,
    pub event: String,
    pub url: String,
}

/// Headline numbers and most-played maps from the team stats page
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TeamStats {
    pub rating: Option<String>,
    pub kd: Option<String>,
    pub maps_played: Option<String>,
    pub top_maps: Vec<MapStat>,
    pub source: String,
}

/// One row of the per-map statistics table
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MapStat {
    pub map: String,
    pub times_played: u32,
    pub win_pct: String,
    pub kd_diff: String,
    pub rating: String,
}

/// Final score, veto sequence and MVP from a match page
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MatchSummary {
    pub teams: [String; 2],
    #[serde(rename = "score")]
    pub scores: [u32; 2],
    pub veto: Vec<String>,
    pub mvp: Option<String>,
    pub source: String,
}

/// A news article with its body joined into markdown paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NewsArticle {
    pub title: String,
    pub author: String,
    #[serde(rename = "datetime_utc")]
    pub published_at: Option<DateTime<Utc>>,
    pub body_md: String,
    pub source: String,
}
