//! Page analysis: extraction rules and the session that aggregates them
//!
//! Each submodule is a set of pure extraction functions over a parsed document.
//! [`Analyzer`] runs all of them against one fetched page and assembles the
//! [`AnalysisResult`]. The only state carried between pages is the
//! duplicate-content [`FingerprintStore`], owned by the analyzer.
//!
//! # Example
//!
//! ```
//! use reqwest::header::HeaderMap;
//! use seo_lens::analysis::Analyzer;
//! use seo_lens::crawler::FetchedPage;
//! use seo_lens::metrics::CoreWebVitals;
//! use url::Url;
//!
//! let page = FetchedPage::from_parts(
//!     Url::parse("https://example.com/").unwrap(),
//!     HeaderMap::new(),
//!     "<html><head><title>Home</title></head><body><h1>Hi</h1></body></html>",
//! );
//!
//! let mut analyzer = Analyzer::new();
//! let result = analyzer.analyze(&page, CoreWebVitals::failed("not requested"));
//! assert_eq!(result.seo.title, "Home");
//! ```

pub mod duplicate;
pub mod indexability;
pub mod metadata;
pub mod readability;
pub mod structure;
pub mod technical;
mod types;

pub use duplicate::FingerprintStore;
pub use types::{
    AnalysisResult, DuplicateStatus, ImprovementFields, Indexability, ReadabilityBand,
    ReadabilityFields, SeoFields, SocialMetadata, TechnicalFields,
};

use crate::crawler::FetchedPage;
use crate::metrics::CoreWebVitals;
use scraper::Html;

/// An analysis session
///
/// Pages analyzed through the same session share one fingerprint store, so a
/// page whose body matches an earlier one is reported as its duplicate.
#[derive(Debug, Default)]
pub struct Analyzer {
    fingerprints: FingerprintStore,
}

impl Analyzer {
    /// Starts a session with an empty fingerprint store
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's fingerprint store
    pub fn fingerprints(&self) -> &FingerprintStore {
        &self.fingerprints
    }

    /// Runs every extractor over `page` and assembles the result record
    ///
    /// `vitals` comes from the metrics client; it is placed into the record
    /// unchanged.
    pub fn analyze(&mut self, page: &FetchedPage, vitals: CoreWebVitals) -> AnalysisResult {
        let url = page.url.as_str();
        let document = Html::parse_document(&page.body);
        let mut result = AnalysisResult::new(url);

        result.seo = metadata::extract_seo(&document, url);

        result.technical = TechnicalFields {
            server: technical::header_value(page, "server"),
            powered_by: technical::header_value(page, "x-powered-by"),
            frameworks: technical::detect_frameworks(&document),
            core_web_vitals: vitals,
            duplicate_content: self.fingerprints.classify(&page.body, url),
        };

        result.readability = readability::score_document(&document);

        let improvements = &mut result.improvements;
        improvements.technical_seo.extend(structure::check_h1(&document).map(str::to_string));
        improvements
            .heading_issues
            .extend(structure::check_hierarchy(&document).map(str::to_string));
        improvements.opportunities = structure::non_http_links(&document, &page.url);
        improvements.indexability = indexability::check_indexability(&document, &page.url);

        tracing::debug!(
            "Extracted {}: title={:?}, frameworks={:?}, readability={}",
            url,
            result.seo.title,
            result.technical.frameworks,
            result.readability.score
        );

        result
    }
}
