use seo_lens::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SAMPLE_PAGE: &str = r#"<html><head>
    <title>  Handmade Ceramics  </title>
    <meta name="description" content="Bowls, plates and mugs thrown by hand.">
    <meta name="keywords" content="ceramics, pottery">
    <meta property="og:title" content="Handmade Ceramics">
    <meta name="twitter:card" content="summary">
    <link rel="canonical" href="https://ceramics.example/">
    <script src="/static/react.production.min.js"></script>
</head><body>
    <h1>Handmade Ceramics</h1>
    <h2>Bowls</h2>
    <p>Every bowl leaves the studio after three firings. Glazes are mixed
    by hand using local minerals. Shipping takes about five working days
    across the country.</p>
    <h3>Care</h3>
    <p>Wash gently with warm water.</p>
    <a href="/shop">Shop</a>
    <a href="mailto:studio@ceramics.example">Write to us</a>
</body></html>"#;

/// A configuration suited to a local mock server
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetcher.crawler_name = "TestBot".to_string();
    config.fetcher.crawler_version = "1.0.0".to_string();
    config.fetcher.timeout_secs = 5;
    config.pagespeed.timeout_secs = 5;
    config
}

/// Points the PageSpeed client at `server` with a test key
pub fn with_pagespeed(mut config: Config, server: &MockServer) -> Config {
    config.pagespeed.endpoint = format!("{}/runPagespeed", server.uri());
    config.pagespeed.api_key = "test-key".to_string();
    config
}

pub async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_html(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}
