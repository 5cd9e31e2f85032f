//! H1, heading hierarchy and link-scheme rules

use scraper::{Html, Selector};
use url::Url;

pub const MISSING_H1: &str = "H1 issue: missing H1";
pub const TOO_MANY_H1: &str = "H1 issue: too many H1s";
pub const BAD_HIERARCHY: &str = "Incorrect hierarchical structure";

/// Exactly one `<h1>` with visible text is expected
///
/// Inline markup and indentation inside the heading do not matter; an empty
/// `<h1></h1>` does not count.
pub fn check_h1(document: &Html) -> Option<&'static str> {
    let Ok(selector) = Selector::parse("h1") else {
        return None;
    };

    let headings = document
        .select(&selector)
        .filter(|h1| h1.text().any(|text| !text.trim().is_empty()))
        .count();

    match headings {
        0 => Some(MISSING_H1),
        1 => None,
        _ => Some(TOO_MANY_H1),
    }
}

/// Heading levels (1-6) in document order
pub fn heading_levels(document: &Html) -> Vec<u8> {
    let Ok(selector) = Selector::parse("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|heading| heading.value().name().strip_prefix('h')?.parse().ok())
        .collect()
}

/// A level may rise at most one step above the previous heading; drops are free
pub fn is_valid_hierarchy(levels: &[u8]) -> bool {
    let mut previous = 0;
    for &level in levels {
        if level > previous + 1 {
            return false;
        }
        previous = level;
    }
    true
}

/// Returns the hierarchy issue, if any (one per page)
pub fn check_hierarchy(document: &Html) -> Option<&'static str> {
    let levels = heading_levels(document);
    (!is_valid_hierarchy(&levels)).then_some(BAD_HIERARCHY)
}

/// One entry per anchor whose href does not resolve to an http(s) URL
pub fn non_http_links(document: &Html, base: &Url) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| {
            !base
                .join(href)
                .is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
        })
        .map(|href| format!("Non-HTTP link: {}", href))
        .collect()
}
