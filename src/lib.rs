//! seo-lens: a single-page SEO auditor
//!
//! This crate fetches one web page (politely, respecting robots.txt), runs a set of
//! independent extraction rules over it, and renders the findings into a report.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod metrics;
pub mod report;
pub mod robots;

use thiserror::Error;

/// Main error type for seo-lens operations
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Content at {url} is not HTML ({content_type})")]
    ContentMismatch { url: String, content_type: String },

    #[error("URL disallowed by robots.txt: {url}")]
    RobotsDenied { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    InvalidScheme(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for seo-lens operations
pub type Result<T> = std::result::Result<T, SeoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analysis::{AnalysisResult, Analyzer};
pub use config::Config;
pub use crawler::{Coordinator, FetchedPage};
pub use metrics::{CoreWebVitals, PageSpeedClient};
pub use report::{write_report, ReportFormat};
