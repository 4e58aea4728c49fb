//! Team stats page parser: headline numbers and the per-map table

use scraper::{Html, Selector};

use crate::hltv::records::{MapStat, TeamStats};
use crate::hltv::{select_text, text_of};

/// Rows of the map-statistics table processed per page; excess rows are
/// silently dropped
pub const TOP_MAPS_CAP: usize = 7;

/// Parses the team stats page into a [`TeamStats`]
pub fn parse_team_stats(html: &str, source_url: &str) -> TeamStats {
    let document = Html::parse_document(html);

    TeamStats {
        rating: select_text(&document, "div.standard-box span.rating"),
        kd: select_text(&document, "div.standard-box span.kd"),
        maps_played: select_text(&document, "div.standard-box span.maps"),
        top_maps: extract_top_maps(&document),
        source: source_url.to_string(),
    }
}

fn extract_top_maps(document: &Html) -> Vec<MapStat> {
    let mut maps = Vec::new();
    let Ok(row_sel) = Selector::parse("table.stats-table tbody tr") else {
        return maps;
    };
    let Ok(cell_sel) = Selector::parse("td") else {
        return maps;
    };

    for row in document.select(&row_sel).take(TOP_MAPS_CAP) {
        let cells: Vec<String> = row.select(&cell_sel).map(text_of).collect();
        // A row shorter than the expected column count is skipped, not an error.
        if cells.len() < 5 {
            continue;
        }
        maps.push(MapStat {
            map: cells[0].clone(),
            times_played: cells[1].parse().unwrap_or(0),
            win_pct: cells[2].clone(),
            kd_diff: cells[3].clone(),
            rating: cells[4].clone(),
        });
    }

    maps
}
