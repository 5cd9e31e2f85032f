//! PageSpeed Insights client against a mock API

use crate::common::{test_config, with_pagespeed};
use seo_lens::{CoreWebVitals, PageSpeedClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_URL: &str = "https://ceramics.example/";

fn lighthouse_body() -> serde_json::Value {
    json!({
        "lighthouseResult": {
            "audits": {
                "largest-contentful-paint": { "displayValue": "1.9 s" },
                "max-potential-fid": { "displayValue": "60 ms" },
                "cumulative-layout-shift": { "displayValue": "0.01" }
            }
        }
    })
}

fn client_for(server: &MockServer) -> PageSpeedClient {
    let config = with_pagespeed(test_config(), server);
    PageSpeedClient::new(&config.pagespeed).unwrap()
}

#[tokio::test]
async fn test_measured_vitals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .and(query_param("url", PAGE_URL))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body()))
        .expect(1)
        .mount(&server)
        .await;

    let vitals = client_for(&server).core_web_vitals(PAGE_URL).await;

    assert_eq!(
        vitals,
        CoreWebVitals::Measured {
            lcp: "1.9 s".to_string(),
            fid: "60 ms".to_string(),
            cls: "0.01".to_string(),
        }
    );
}

#[tokio::test]
async fn test_server_error_collapses_to_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let vitals = client_for(&server).core_web_vitals(PAGE_URL).await;

    match vitals {
        CoreWebVitals::Failed { error } => assert!(error.contains("500")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_collapses_to_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let vitals = client_for(&server).core_web_vitals(PAGE_URL).await;

    match vitals {
        CoreWebVitals::Failed { error } => assert!(error.starts_with("malformed response")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_partial_audits_discarded() {
    let server = MockServer::start().await;
    let mut body = lighthouse_body();
    body["lighthouseResult"]["audits"]
        .as_object_mut()
        .unwrap()
        .remove("cumulative-layout-shift");

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let vitals = client_for(&server).core_web_vitals(PAGE_URL).await;

    match vitals {
        CoreWebVitals::Failed { error } => assert!(error.contains("cumulative-layout-shift")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_api_collapses_to_failed() {
    let mut config = test_config();
    config.pagespeed.endpoint = "http://127.0.0.1:1/runPagespeed".to_string();
    config.pagespeed.api_key = "test-key".to_string();
    let client = PageSpeedClient::new(&config.pagespeed).unwrap();

    let vitals = client.core_web_vitals(PAGE_URL).await;

    assert!(matches!(vitals, CoreWebVitals::Failed { .. }));
}

#[tokio::test]
async fn test_empty_key_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = with_pagespeed(test_config(), &server);
    config.pagespeed.api_key = String::new();
    let client = PageSpeedClient::new(&config.pagespeed).unwrap();

    let vitals = client.core_web_vitals(PAGE_URL).await;

    assert_eq!(vitals, CoreWebVitals::failed("no PageSpeed API key configured"));
}
