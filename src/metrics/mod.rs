//! Third-party performance metrics
//!
//! Core Web Vitals come from the PageSpeed Insights API. Any failure collapses
//! the metrics into a single error string; partial metrics are never kept.

mod pagespeed;

pub use pagespeed::PageSpeedClient;

use serde::Serialize;
use thiserror::Error;

/// Errors from the metrics service
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("no PageSpeed API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("PageSpeed API returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("audit '{0}' missing from response")]
    MissingAudit(&'static str),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Core Web Vitals of a page, or why they are unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreWebVitals {
    /// Display strings as reported by Lighthouse
    Measured { lcp: String, fid: String, cls: String },
    /// The metrics call failed
    Failed { error: String },
}

impl CoreWebVitals {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }
}

impl Default for CoreWebVitals {
    fn default() -> Self {
        Self::failed("not measured")
    }
}
