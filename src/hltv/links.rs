//! Internal link discovery
//!
//! Scans a page for hyperlinks into the site sections the bot cares
//! about. The result has set semantics and no defined order.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use crate::hltv::HLTV_BASE;

/// Path prefixes worth following
const ALLOWED_PREFIXES: [&str; 3] = ["/news/", "/matches/", "/stats/"];

fn is_internal_path(path: &str) -> bool {
    ALLOWED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Returns the set of absolute URLs whose path starts with one of the
/// allow-listed prefixes
///
/// Relative hrefs are resolved against the fixed site base; absolute
/// hrefs are kept as-is when their path matches.
pub fn discover_links(html: &str) -> HashSet<String> {
    let mut links = HashSet::new();
    let document = Html::parse_document(html);
    let Ok(anchor_sel) = Selector::parse("a[href]") else {
        return links;
    };
    let Ok(base) = Url::parse(HLTV_BASE) else {
        return links;
    };

    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        if href.starts_with("http://") || href.starts_with("https://") {
            if let Ok(parsed) = Url::parse(href) {
                if is_internal_path(parsed.path()) {
                    links.insert(href.to_string());
                }
            }
        } else if is_internal_path(href) {
            if let Ok(resolved) = base.join(href) {
                links.insert(resolved.to_string());
            }
        }
    }

    links
}
