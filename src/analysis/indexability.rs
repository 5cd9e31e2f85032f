//! On-page indexability heuristics

use crate::analysis::metadata::first_attr;
use crate::analysis::types::Indexability;
use scraper::Html;
use url::Url;

/// Path segments treated as blocked from indexing
pub const DISALLOWED_SEGMENTS: [&str; 3] = ["/admin", "/private", "/test"];

/// Reads the robots meta tag and checks the URL path against blocked segments
pub fn check_indexability(document: &Html, url: &Url) -> Indexability {
    let noindex = first_attr(document, "meta[name='robots']", "content")
        .is_some_and(|content| content.to_lowercase().contains("noindex"));

    let path = url.path();
    let disallowed = DISALLOWED_SEGMENTS
        .iter()
        .any(|segment| path.contains(segment));

    Indexability {
        noindex,
        disallowed,
    }
}
