use crate::config::types::{Config, FetcherConfig, PageSpeedConfig, ReportConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_pagespeed_config(&config.pagespeed)?;
    validate_report_config(&config.report)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetcher timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if !config.max_crawl_delay_secs.is_finite() || config.max_crawl_delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "max_crawl_delay_secs must be a non-negative number, got {}",
            config.max_crawl_delay_secs
        )));
    }

    if !config.contact_url.is_empty() {
        validate_http_url("contact_url", &config.contact_url)?;
    }

    Ok(())
}

/// Validates PageSpeed client configuration
fn validate_pagespeed_config(config: &PageSpeedConfig) -> Result<(), ConfigError> {
    validate_http_url("pagespeed endpoint", &config.endpoint)?;

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "pagespeed timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates report output configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.file_stem.is_empty() {
        return Err(ConfigError::Validation(
            "file_stem cannot be empty".to_string(),
        ));
    }

    if config.file_stem.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "file_stem must be a bare file name, got '{}'",
            config.file_stem
        )));
    }

    Ok(())
}

/// Checks that `value` parses as an http or https URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
