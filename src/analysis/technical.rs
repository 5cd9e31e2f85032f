//! Response-header and framework signals

use crate::analysis::metadata::exists;
use crate::crawler::FetchedPage;
use scraper::{Html, Selector};

/// One framework detection rule
struct FrameworkRule {
    label: &'static str,
    matches: fn(&Html) -> bool,
}

/// Checked in order; every matching rule adds its label
const FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        label: "WordPress",
        matches: is_wordpress,
    },
    FrameworkRule {
        label: "React",
        matches: is_react,
    },
    FrameworkRule {
        label: "Shopify",
        matches: is_shopify,
    },
];

/// Header value decoded as UTF-8 with invalid bytes dropped; empty if absent
pub fn header_value(page: &FetchedPage, name: &str) -> String {
    page.headers
        .get(name)
        .map(|value| decode_lenient(value.as_bytes()))
        .unwrap_or_default()
}

/// Runs every framework rule against the document
pub fn detect_frameworks(document: &Html) -> Vec<String> {
    FRAMEWORK_RULES
        .iter()
        .filter(|rule| (rule.matches)(document))
        .map(|rule| rule.label.to_string())
        .collect()
}

fn decode_lenient(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn is_wordpress(document: &Html) -> bool {
    any_attr_contains(document, "meta[name='generator']", "content", "WordPress")
}

fn is_react(document: &Html) -> bool {
    any_attr_contains(document, "script[src]", "src", "react")
}

fn is_shopify(document: &Html) -> bool {
    exists(document, "meta[name='shopify-checkout-api-token']")
}

fn any_attr_contains(document: &Html, selector: &str, attr: &str, needle: &str) -> bool {
    let Ok(selector) = Selector::parse(selector) else {
        return false;
    };
    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .any(|value| value.contains(needle))
}
