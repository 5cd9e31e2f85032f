//! Full cycle: fetch, analyze, measure and write the report

use crate::common::{mount_html, mount_robots, test_config, with_pagespeed, SAMPLE_PAGE};
use seo_lens::analysis::DuplicateStatus;
use seo_lens::{write_report, CoreWebVitals, Coordinator, ReportFormat, SeoError};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_analyze_page_end_to_end() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nAllow: /").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(SAMPLE_PAGE, "text/html")
                .insert_header("server", "nginx/1.25")
                .insert_header("x-powered-by", "PHP/8.2"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lighthouseResult": { "audits": {
                "largest-contentful-paint": { "displayValue": "2.4 s" },
                "max-potential-fid": { "displayValue": "90 ms" },
                "cumulative-layout-shift": { "displayValue": "0.08" }
            }}
        })))
        .mount(&server)
        .await;

    let config = with_pagespeed(test_config(), &server);
    let mut coordinator = Coordinator::new(config).unwrap();
    let url = format!("{}/", server.uri());

    let result = coordinator.analyze_url(&url).await.unwrap();

    assert_eq!(result.url, url);
    assert_eq!(result.seo.title, "Handmade Ceramics");
    assert_eq!(
        result.seo.meta_description,
        "Bowls, plates and mugs thrown by hand."
    );
    assert_eq!(result.seo.keywords, "ceramics, pottery");
    assert_eq!(result.seo.canonical.as_deref(), Some("https://ceramics.example/"));
    assert!(result.seo.social.twitter_card);
    assert_eq!(result.technical.server, "nginx/1.25");
    assert_eq!(result.technical.powered_by, "PHP/8.2");
    assert_eq!(result.technical.frameworks, vec!["React"]);
    assert!(matches!(
        result.technical.core_web_vitals,
        CoreWebVitals::Measured { .. }
    ));
    assert_eq!(result.technical.duplicate_content, DuplicateStatus::Unique);
    assert!(result.readability.interpretation.is_some());
    assert!(result.improvements.technical_seo.is_empty());
    assert!(result.improvements.heading_issues.is_empty());
    assert_eq!(
        result.improvements.opportunities,
        vec!["Non-HTTP link: mailto:studio@ceramics.example".to_string()]
    );
    assert!(!result.improvements.indexability.noindex);
    assert!(!result.improvements.indexability.disallowed);
}

#[tokio::test]
async fn test_duplicate_bodies_across_pages() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", SAMPLE_PAGE).await;
    mount_html(&server, "/b", SAMPLE_PAGE).await;

    let mut coordinator = Coordinator::new(test_config()).unwrap();
    let first_url = format!("{}/a", server.uri());

    let first = coordinator.analyze_url(&first_url).await.unwrap();
    let second = coordinator
        .analyze_url(&format!("{}/b", server.uri()))
        .await
        .unwrap();

    assert_eq!(first.technical.duplicate_content, DuplicateStatus::Unique);
    assert_eq!(
        second.technical.duplicate_content,
        DuplicateStatus::DuplicateOf(first_url)
    );
    assert_eq!(coordinator.analyzer().fingerprints().len(), 1);
}

#[tokio::test]
async fn test_failed_fetch_leaves_session_usable() {
    let server = MockServer::start().await;
    mount_html(&server, "/ok", SAMPLE_PAGE).await;

    let mut coordinator = Coordinator::new(test_config()).unwrap();

    let missing = coordinator
        .analyze_url(&format!("{}/missing", server.uri()))
        .await;
    assert!(matches!(missing, Err(SeoError::HttpStatus { status: 404, .. })));

    let ok = coordinator
        .analyze_url(&format!("{}/ok", server.uri()))
        .await
        .unwrap();
    assert_eq!(ok.seo.title, "Handmade Ceramics");
}

#[tokio::test]
async fn test_sparse_page_without_api_key() {
    let server = MockServer::start().await;
    mount_html(&server, "/admin/panel", "<html><body><p>Hi</p></body></html>").await;

    let mut coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator
        .analyze_url(&format!("{}/admin/panel", server.uri()))
        .await
        .unwrap();

    assert_eq!(result.seo.title, "");
    assert_eq!(result.readability.score, 0.0);
    assert_eq!(result.readability.interpretation, None);
    assert_eq!(
        result.technical.core_web_vitals,
        CoreWebVitals::failed("no PageSpeed API key configured")
    );
    assert_eq!(
        result.improvements.technical_seo,
        vec!["H1 issue: missing H1".to_string()]
    );
    assert!(result.improvements.indexability.disallowed);
}

#[tokio::test]
async fn test_reports_written_per_page() {
    let server = MockServer::start().await;
    mount_html(&server, "/one", SAMPLE_PAGE).await;
    mount_html(&server, "/two", "<html><body><h1>Two</h1></body></html>").await;

    let dir = TempDir::new().unwrap();
    let mut config = test_config();
    config.report.output_dir = dir.path().join("informes").to_string_lossy().into_owned();
    let report_config = config.report.clone();
    let mut coordinator = Coordinator::new(config).unwrap();

    let mut paths = Vec::new();
    for (index, page) in ["/one", "/two"].iter().enumerate() {
        let result = coordinator
            .analyze_url(&format!("{}{}", server.uri(), page))
            .await
            .unwrap();
        paths.push(write_report(&result, &report_config, index).unwrap());
    }

    assert!(paths[0].ends_with("informes/informe_seo.pdf"));
    assert!(paths[1].ends_with("informes/informe_seo_2.pdf"));
    for path in &paths {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[tokio::test]
async fn test_markdown_report_contents() {
    let server = MockServer::start().await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let dir = TempDir::new().unwrap();
    let mut config = test_config();
    config.report.output_dir = dir.path().to_string_lossy().into_owned();
    config.report.format = ReportFormat::Markdown;
    let report_config = config.report.clone();
    let mut coordinator = Coordinator::new(config).unwrap();

    let result = coordinator
        .analyze_url(&format!("{}/", server.uri()))
        .await
        .unwrap();
    let path = write_report(&result, &report_config, 0).unwrap();
    let markdown = std::fs::read_to_string(path).unwrap();

    assert!(markdown.contains("- **Title**: Handmade Ceramics"));
    assert!(markdown.contains("Error: no PageSpeed API key configured"));
    assert!(markdown.contains("- Non-HTTP link: mailto:studio@ceramics.example"));
    assert!(markdown.contains("Status: INDEXABLE"));
}

#[tokio::test]
async fn test_result_serializes_to_json() {
    let server = MockServer::start().await;
    mount_html(&server, "/", SAMPLE_PAGE).await;

    let mut coordinator = Coordinator::new(test_config()).unwrap();
    let result = coordinator
        .analyze_url(&format!("{}/", server.uri()))
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["seo"]["title"], "Handmade Ceramics");
    assert!(value["technical"]["core_web_vitals"]["failed"]["error"].is_string());
    assert!(value["readability"]["score"].is_number());
}
