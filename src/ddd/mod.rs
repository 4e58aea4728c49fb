//! Brazilian DDD (area code) lookup
//!
//! Resolves a two-digit area code to its state and served cities by
//! scraping the carrier blog page for that code. The page parser is a
//! pure function; the scraper adds fetching and a bounded result cache
//! keyed by code.

mod lookup;
mod parser;

pub use lookup::{DddScraper, CLARO_BLOG_BASE};
pub use parser::{parse_area_code_page, AreaCodeLocation};
