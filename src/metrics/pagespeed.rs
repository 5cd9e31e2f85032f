//! PageSpeed Insights client

use crate::config::PageSpeedConfig;
use crate::metrics::{CoreWebVitals, MetricsError};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const LCP_AUDIT: &str = "largest-contentful-paint";
const FID_AUDIT: &str = "max-potential-fid";
const CLS_AUDIT: &str = "cumulative-layout-shift";

/// Client for the runPagespeed endpoint
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    pub fn new(config: &PageSpeedConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Core Web Vitals for `page_url`; failures become [`CoreWebVitals::Failed`]
    pub async fn core_web_vitals(&self, page_url: &str) -> CoreWebVitals {
        match self.fetch_vitals(page_url).await {
            Ok(vitals) => vitals,
            Err(e) => {
                tracing::warn!("Core Web Vitals unavailable for {}: {}", page_url, e);
                CoreWebVitals::failed(e.to_string())
            }
        }
    }

    /// One request, no retry
    pub async fn fetch_vitals(&self, page_url: &str) -> Result<CoreWebVitals, MetricsError> {
        if self.api_key.is_empty() {
            return Err(MetricsError::MissingApiKey);
        }

        let mut request_url = Url::parse(&self.endpoint)?;
        request_url
            .query_pairs_mut()
            .append_pair("url", page_url)
            .append_pair("key", &self.api_key);

        tracing::debug!("Requesting PageSpeed metrics for {}", page_url);

        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MetricsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;
        parse_vitals(&data)
    }
}

/// Reads the three audit display values; all or nothing
pub(crate) fn parse_vitals(data: &Value) -> Result<CoreWebVitals, MetricsError> {
    Ok(CoreWebVitals::Measured {
        lcp: display_value(data, LCP_AUDIT)?,
        fid: display_value(data, FID_AUDIT)?,
        cls: display_value(data, CLS_AUDIT)?,
    })
}

fn display_value(data: &Value, audit: &'static str) -> Result<String, MetricsError> {
    data.get("lighthouseResult")
        .and_then(|result| result.get("audits"))
        .and_then(|audits| audits.get(audit))
        .and_then(|entry| entry.get("displayValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(MetricsError::MissingAudit(audit))
}
