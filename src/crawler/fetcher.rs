//! HTTP fetcher implementation
//!
//! This module handles the page request itself:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET with redirect following
//! - Classifying failures (status, content type, network)

use crate::config::FetcherConfig;
use crate::SeoError;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// A successfully fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: Url,
    /// HTTP status code
    pub status: u16,
    /// Response headers, raw
    pub headers: HeaderMap,
    /// Page body
    pub body: String,
}

impl FetchedPage {
    /// Builds a page from already-fetched parts (status 200)
    pub fn from_parts(url: Url, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            url,
            status: 200,
            headers,
            body: body.into(),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use seo_lens::config::FetcherConfig;
/// use seo_lens::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx, HTML or no Content-Type | `Ok(FetchedPage)` |
/// | 2xx, other Content-Type | `ContentMismatch` |
/// | Non-2xx after redirects | `HttpStatus` |
/// | Network error / timeout | `Http` |
///
/// No retries.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, SeoError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|source| SeoError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let final_url = response.url().clone();

    if final_url != *url {
        tracing::debug!("{} redirected to {}", url, final_url);
    }

    if !status.is_success() {
        return Err(SeoError::HttpStatus {
            url: final_url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.is_empty() && !content_type.to_ascii_lowercase().contains("html") {
        return Err(SeoError::ContentMismatch {
            url: final_url.to_string(),
            content_type,
        });
    }

    let headers = response.headers().clone();
    let body = response.text().await.map_err(|source| SeoError::Http {
        url: final_url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage {
        url: final_url,
        status: status.as_u16(),
        headers,
        body,
    })
}
