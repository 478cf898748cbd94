// src/links/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup instead of failing
//
// Unlike a link checker, we don't resolve or filter anything here: every
// <a href> in the document becomes a Link, in document order. Deciding what
// a link means is the job of the page discoverer and the download planner.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

// A hyperlink found in an HTML document
//
// url: the raw href value, exactly as written in the document
// title: the title attribute, or the visible text of the anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub title: String,
}

// Extracts every link from an HTML document
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<Link> in document order. Anchors without href are skipped.
//
// Example:
//   html = "<a href='/x' title='T'>ignored</a><a href='/y'>Visible</a>"
//   result = [Link { url: "/x", title: "T" }, Link { url: "/y", title: "Visible" }]
pub fn extract_links(html: &str) -> Vec<Link> {
    // parse_document never fails; malformed markup is repaired the way a browser would
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    // The selector is a constant, so failing to parse it is a programmer error
    let selector = Selector::parse("a[href]").expect("`a[href]` is a valid CSS selector");

    document
        .select(&selector)
        .filter_map(|element| {
            let url = element.value().attr("href")?;
            Some(Link {
                url: url.to_string(),
                title: link_title(&element),
            })
        })
        .collect()
}

// Picks the display title of an anchor
//
// A non-empty title attribute wins; otherwise the concatenated text of the
// anchor (including nested elements like <b> or <span>) is used.
fn link_title(element: &ElementRef) -> String {
    match element.value().attr("title") {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => element.text().collect(),
    }
}
