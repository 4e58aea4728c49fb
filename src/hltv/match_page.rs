//! Match page parser: final score, veto sequence, MVP

use scraper::Html;

use crate::hltv::records::MatchSummary;
use crate::hltv::{select_all_text, select_text};

/// Parses a match page into a [`MatchSummary`]
///
/// Team names and scores come from the first two `teamName`/`score`
/// blocks; a page with fewer than two of either keeps the defaults
/// (empty names, 0-0). The veto sequence tries the round-history blocks
/// first and the veto box list second.
pub fn parse_match_summary(html: &str, source_url: &str) -> MatchSummary {
    let document = Html::parse_document(html);

    let team_names = select_all_text(&document, "div.teamName");
    let score_texts = select_all_text(&document, "div.score");

    let (teams, scores) = if team_names.len() >= 2 && score_texts.len() >= 2 {
        (
            [team_names[0].clone(), team_names[1].clone()],
            [parse_score(&score_texts[0]), parse_score(&score_texts[1])],
        )
    } else {
        ([String::new(), String::new()], [0, 0])
    };

    let mut veto = select_all_text(&document, "div.round-history-con");
    if veto.is_empty() {
        veto = select_all_text(&document, "div.veto-box ul li");
    }

    MatchSummary {
        teams,
        scores,
        veto,
        mvp: select_text(&document, "div.highlighted-player div.name"),
        source: source_url.to_string(),
    }
}

/// A malformed or absent score reads as 0, never fails
fn parse_score(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
