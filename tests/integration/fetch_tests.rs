//! Fetching through the coordinator: robots.txt, crawl delay and failure classes

use crate::common::{mount_html, mount_robots, test_config, SAMPLE_PAGE};
use seo_lens::{Coordinator, SeoError};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_html_page() {
    let server = MockServer::start().await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let page = coordinator
        .fetch(&format!("{}/", server.uri()))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert!(page.body.contains("Handmade Ceramics"));
}

#[tokio::test]
async fn test_robots_disallow_prevents_fetch() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /private").await;

    Mock::given(method("GET"))
        .and(path("/private/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_PAGE, "text/html"))
        .expect(0)
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator
        .fetch(&format!("{}/private/page", server.uri()))
        .await;

    assert!(matches!(result, Err(SeoError::RobotsDenied { .. })));
}

#[tokio::test]
async fn test_robots_group_for_our_agent() {
    let server = MockServer::start().await;
    mount_robots(
        &server,
        "User-agent: TestBot\nDisallow: /\n\nUser-agent: *\nAllow: /",
    )
    .await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator.fetch(&format!("{}/", server.uri())).await;

    assert!(matches!(result, Err(SeoError::RobotsDenied { .. })));
}

#[tokio::test]
async fn test_robots_ignored_when_disabled() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /").await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let mut config = test_config();
    config.fetcher.obey_robots = false;
    let coordinator = Coordinator::new(config).unwrap();

    assert!(coordinator
        .fetch(&format!("{}/", server.uri()))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_missing_robots_allows_everything() {
    let server = MockServer::start().await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    assert!(coordinator
        .fetch(&format!("{}/", server.uri()))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_crawl_delay_is_honored() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nCrawl-delay: 1\nAllow: /").await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let start = Instant::now();
    coordinator
        .fetch(&format!("{}/", server.uri()))
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_crawl_delay_is_capped() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nCrawl-delay: 60\nAllow: /").await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let mut config = test_config();
    config.fetcher.max_crawl_delay_secs = 0.1;
    let coordinator = Coordinator::new(config).unwrap();

    let start = Instant::now();
    coordinator
        .fetch(&format!("{}/", server.uri()))
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_not_found_is_http_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator
        .fetch(&format!("{}/missing", server.uri()))
        .await;

    assert!(matches!(
        result,
        Err(SeoError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_non_html_content_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brochure.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("%PDF-1.4", "application/pdf"))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator
        .fetch(&format!("{}/brochure.pdf", server.uri()))
        .await;

    match result {
        Err(SeoError::ContentMismatch { content_type, .. }) => {
            assert!(content_type.starts_with("application/pdf"));
        }
        other => panic!("expected content mismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/new"),
        )
        .mount(&server)
        .await;
    mount_html(&server, "/new", SAMPLE_PAGE).await;

    let coordinator = Coordinator::new(test_config()).unwrap();
    let page = coordinator
        .fetch(&format!("{}/old", server.uri()))
        .await
        .unwrap();

    assert_eq!(page.url.path(), "/new");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let mut config = test_config();
    config.fetcher.obey_robots = false;
    let coordinator = Coordinator::new(config).unwrap();

    let result = coordinator.fetch("http://127.0.0.1:1/").await;

    assert!(matches!(result, Err(SeoError::Http { .. })));
}

#[tokio::test]
async fn test_unsupported_scheme() {
    let coordinator = Coordinator::new(test_config()).unwrap();

    let result = coordinator.fetch("ftp://files.example/index.html").await;

    assert!(matches!(result, Err(SeoError::InvalidScheme(scheme)) if scheme == "ftp"));
}
