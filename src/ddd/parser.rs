//! Area-code page parser
//!
//! The blog lays every DDD article out the same way: the sixth section
//! of the main content container carries the city list, and its heading
//! names the state. When that section is absent the layout has drifted
//! and the parser returns the empty record rather than guessing.

use std::collections::BTreeSet;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// State and served cities for one Brazilian area code
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AreaCodeLocation {
    /// State name; empty when no textual pattern matched
    pub state: String,
    /// Deduplicated, alphabetically sorted city list
    pub cities: Vec<String>,
    pub source: String,
}

/// The area-code section sits at a fixed position in the article body
const TARGET_SECTION: &str = "#cms-Main-Content > section:nth-of-type(6)";
const FIRST_SECTION: &str = "#cms-Main-Content > section:nth-of-type(1)";

/// Parses a DDD blog page into an [`AreaCodeLocation`]
pub fn parse_area_code_page(html: &str, source_url: &str) -> AreaCodeLocation {
    let document = Html::parse_document(html);

    let Some(section) = select_first(&document, TARGET_SECTION) else {
        return AreaCodeLocation {
            state: String::new(),
            cities: Vec::new(),
            source: source_url.to_string(),
        };
    };

    AreaCodeLocation {
        state: extract_state(&document, section),
        cities: extract_cities(section),
        source: source_url.to_string(),
    }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    document.select(&sel).next()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// All non-empty list-item texts in the section, deduplicated and sorted
fn extract_cities(section: ElementRef<'_>) -> Vec<String> {
    let Ok(item_sel) = Selector::parse("li") else {
        return Vec::new();
    };
    let unique: BTreeSet<String> = section
        .select(&item_sel)
        .map(text_of)
        .filter(|city| !city.is_empty())
        .collect();
    unique.into_iter().collect()
}

/// State extraction strategies, in order: the section heading's
/// `DDD <n> - <state>` suffix, then an `estado do <state>.` phrase in
/// the paragraph nearest before the first section
fn extract_state(document: &Html, section: ElementRef<'_>) -> String {
    if let Some(state) = state_from_heading(section) {
        return state;
    }
    state_from_preceding_paragraph(document).unwrap_or_default()
}

fn state_from_heading(section: ElementRef<'_>) -> Option<String> {
    let heading_sel = Selector::parse("h2, h3").ok()?;
    let heading = section.select(&heading_sel).next()?;
    let pattern = Regex::new(r"DDD\s+\d+\s*-\s*([^–—-]+)$").ok()?;
    let text = text_of(heading);
    pattern
        .captures(&text)
        .map(|caps| caps[1].trim().to_string())
}

fn state_from_preceding_paragraph(document: &Html) -> Option<String> {
    let first_section = select_first(document, FIRST_SECTION)?;
    let union_sel = Selector::parse("p, section").ok()?;

    // Nearest <p> before the first section, in document order.
    let mut nearest: Option<String> = None;
    for element in document.select(&union_sel) {
        if element.id() == first_section.id() {
            break;
        }
        if element.value().name() == "p" {
            nearest = Some(text_of(element));
        }
    }

    let paragraph = nearest?;
    let pattern = Regex::new(r"(?i)estado do\s+(.+?)\.").ok()?;
    pattern
        .captures(&paragraph)
        .map(|caps| caps[1].to_string())
}
