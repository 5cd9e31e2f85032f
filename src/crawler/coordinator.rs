//! Audit coordinator - per-page orchestration
//!
//! Drives one page at a time through the pipeline:
//! robots.txt check -> crawl delay -> fetch -> extraction -> PageSpeed metrics.
//! The coordinator owns the analysis session, so every page it audits shares
//! the same duplicate-content fingerprint store.

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::Config;
use crate::crawler::{build_http_client, fetch_page, FetchedPage};
use crate::metrics::PageSpeedClient;
use crate::robots::{fetch_robots, is_allowed};
use crate::SeoError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Main audit coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    analyzer: Analyzer,
    pagespeed: PageSpeedClient,
}

impl Coordinator {
    /// Creates a new coordinator with a fresh analysis session
    pub fn new(config: Config) -> Result<Self, SeoError> {
        let client = build_http_client(&config.fetcher)?;
        let pagespeed = PageSpeedClient::new(&config.pagespeed)?;

        Ok(Self {
            config,
            client,
            analyzer: Analyzer::new(),
            pagespeed,
        })
    }

    /// The analysis session shared by every page of this run
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Fetches and analyzes one page
    ///
    /// Fetch failures (robots denial, HTTP errors, non-HTML content) are
    /// returned; everything after the fetch degrades inside the result record.
    pub async fn analyze_url(&mut self, url: &str) -> Result<AnalysisResult, SeoError> {
        let page = self.fetch(url).await?;

        let vitals = self.pagespeed.core_web_vitals(page.url.as_str()).await;
        let result = self.analyzer.analyze(&page, vitals);

        tracing::info!(
            "Analyzed {}: {} technical, {} heading, {} opportunity issues",
            result.url,
            result.improvements.technical_seo.len(),
            result.improvements.heading_issues.len(),
            result.improvements.opportunities.len()
        );

        Ok(result)
    }

    /// Fetches one page, honoring robots.txt and its Crawl-delay
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, SeoError> {
        let url = Url::parse(url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SeoError::InvalidScheme(url.scheme().to_string()));
        }

        if self.config.fetcher.obey_robots {
            let agent = &self.config.fetcher.crawler_name;
            let robots = fetch_robots(&self.client, &url).await;

            if !is_allowed(&robots, url.as_str(), agent) {
                return Err(SeoError::RobotsDenied {
                    url: url.to_string(),
                });
            }

            if let Some(delay) = robots.crawl_delay(agent) {
                let delay = delay.min(self.config.fetcher.max_crawl_delay_secs);
                if delay > 0.0 {
                    tracing::debug!("Honoring crawl delay of {:.1}s", delay);
                    tokio::time::sleep(Duration::from_secs_f64(delay)).await;
                }
            }
        }

        tracing::info!("Fetching {}", url);
        fetch_page(&self.client, &url).await
    }
}
