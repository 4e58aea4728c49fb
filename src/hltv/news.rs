//! News article parser

use scraper::{Html, Selector};

use crate::hltv::records::NewsArticle;
use crate::hltv::timestamp::parse_millis;
use crate::hltv::{select_text, text_of};

/// Parses a news page into a [`NewsArticle`]
///
/// The body is the ordered concatenation of non-empty paragraph texts,
/// separated by a blank line.
pub fn parse_news(html: &str, source_url: &str) -> NewsArticle {
    let document = Html::parse_document(html);

    let published_at = Selector::parse("span.date")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .and_then(|date| parse_millis(date.value().attr("data-unix")));

    let paragraphs: Vec<String> = Selector::parse("div.newsline-body p")
        .ok()
        .map(|sel| {
            document
                .select(&sel)
                .map(text_of)
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();

    NewsArticle {
        title: select_text(&document, "h1.newsline-title").unwrap_or_default(),
        author: select_text(&document, "span.author a").unwrap_or_default(),
        published_at,
        body_md: paragraphs.join("\n\n"),
        source: source_url.to_string(),
    }
}
