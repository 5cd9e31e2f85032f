use crate::report::ReportFormat;
use serde::Deserialize;

/// Main configuration structure for seo-lens
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub pagespeed: PageSpeedConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Page fetching and crawl-policy configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FetcherConfig {
    /// Name of the crawler, used as the robots.txt product token
    #[serde(default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler (optional)
    #[serde(default)]
    pub contact_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,

    /// Whether robots.txt is consulted before fetching
    #[serde(default = "default_true")]
    pub obey_robots: bool,

    /// Upper bound on an honored robots.txt Crawl-delay, in seconds
    #[serde(default = "default_max_crawl_delay")]
    pub max_crawl_delay_secs: f64,
}

/// PageSpeed Insights client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PageSpeedConfig {
    /// API key; empty disables real scoring
    #[serde(default)]
    pub api_key: String,

    /// runPagespeed endpoint
    #[serde(default = "default_pagespeed_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_pagespeed_timeout")]
    pub timeout_secs: u64,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReportConfig {
    /// Directory the report is written into (created if absent)
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Report file name without extension
    #[serde(default = "default_file_stem")]
    pub file_stem: String,

    /// Output format
    #[serde(default)]
    pub format: ReportFormat,

    /// TrueType font for PDF text; empty uses the bundled DejaVu Sans
    #[serde(default)]
    pub font_path: String,
}

impl FetcherConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL)`
    pub fn user_agent(&self) -> String {
        if self.contact_url.is_empty() {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        } else {
            format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, self.contact_url
            )
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: String::new(),
            timeout_secs: default_fetch_timeout(),
            obey_robots: true,
            max_crawl_delay_secs: default_max_crawl_delay(),
        }
    }
}

impl Default for PageSpeedConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_pagespeed_endpoint(),
            timeout_secs: default_pagespeed_timeout(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_stem: default_file_stem(),
            format: ReportFormat::default(),
            font_path: String::new(),
        }
    }
}

fn default_crawler_name() -> String {
    "SeoLens".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_max_crawl_delay() -> f64 {
    10.0
}

fn default_pagespeed_endpoint() -> String {
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed".to_string()
}

fn default_pagespeed_timeout() -> u64 {
    60
}

fn default_output_dir() -> String {
    "informes".to_string()
}

fn default_file_stem() -> String {
    "informe_seo".to_string()
}
