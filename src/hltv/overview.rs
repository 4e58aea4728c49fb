//! Team overview page parser: roster, upcoming matches, recent results

use scraper::{Html, Selector};

use crate::hltv::records::{RecentResult, RosterEntry, TeamOverview, UpcomingMatch};
use crate::hltv::timestamp::parse_millis;
use crate::hltv::{text_of, HLTV_BASE};

/// Parses the team page into a [`TeamOverview`]
///
/// Every section degrades independently: a page without a roster block,
/// upcoming-match list or results list yields empty lists for those
/// fields.
pub fn parse_team_overview(html: &str, source_url: &str) -> TeamOverview {
    let document = Html::parse_document(html);

    TeamOverview {
        roster: extract_roster(&document),
        next_matches: extract_next_matches(&document),
        recent_results: extract_recent_results(&document),
        source: source_url.to_string(),
    }
}

fn extract_roster(document: &Html) -> Vec<RosterEntry> {
    let mut roster = Vec::new();
    let Ok(player_sel) = Selector::parse(".player-holder .flagCon") else {
        return roster;
    };
    let Ok(name_sel) = Selector::parse("span.name") else {
        return roster;
    };
    let Ok(flag_sel) = Selector::parse("img.flag") else {
        return roster;
    };

    for player in document.select(&player_sel) {
        let Some(name) = player.select(&name_sel).next() else {
            continue;
        };
        let country = player
            .select(&flag_sel)
            .next()
            .and_then(|img| img.value().attr("title"))
            .unwrap_or("")
            .to_string();
        roster.push(RosterEntry {
            nickname: text_of(name),
            country,
        });
    }

    roster
}

fn extract_next_matches(document: &Html) -> Vec<UpcomingMatch> {
    let mut matches = Vec::new();
    let Ok(row_sel) = Selector::parse("div.upcoming-match .matchList") else {
        return matches;
    };
    let Ok(link_sel) = Selector::parse("a.match") else {
        return matches;
    };
    let Ok(opponent_sel) = Selector::parse(".opponent div") else {
        return matches;
    };
    let Ok(event_sel) = Selector::parse(".matchInfoEmpty span") else {
        return matches;
    };

    for row in document.select(&row_sel) {
        let Some(link) = row.select(&link_sel).next() else {
            continue;
        };
        let href = link.value().attr("href").unwrap_or("");
        let opponent = link
            .select(&opponent_sel)
            .next()
            .map(text_of)
            .unwrap_or_else(|| "TBD".to_string());
        let event = link
            .select(&event_sel)
            .next()
            .map(text_of)
            .unwrap_or_default();
        let time = parse_millis(link.value().attr("data-zonedgrouping-entry-unix"));

        matches.push(UpcomingMatch {
            opponent,
            event,
            time,
            url: format!("{HLTV_BASE}{href}"),
        });
    }

    matches
}

fn extract_recent_results(document: &Html) -> Vec<RecentResult> {
    let mut results = Vec::new();
    let Ok(row_sel) = Selector::parse("div.results-holder .results-sublist a") else {
        return results;
    };
    let Ok(score_sel) = Selector::parse(".result-score") else {
        return results;
    };
    let Ok(team_sel) = Selector::parse(".team") else {
        return results;
    };
    let Ok(event_sel) = Selector::parse(".event") else {
        return results;
    };

    for row in document.select(&row_sel) {
        let href = row.value().attr("href").unwrap_or("");
        let score = row.select(&score_sel).next().map(text_of).unwrap_or_default();
        let opponent = row.select(&team_sel).next().map(text_of).unwrap_or_default();
        let event = row.select(&event_sel).next().map(text_of).unwrap_or_default();

        results.push(RecentResult {
            score,
            opponent,
            event,
            url: format!("{HLTV_BASE}{href}"),
        });
    }

    results
}
