//! Integration tests for the auditor
//!
//! These tests use wiremock to serve pages and images, run the full audit
//! pipeline end-to-end, and inspect the written report file.

use sitecheck::audit::run_audit;
use sitecheck::config::{Config, OutputConfig, SiteConfig, ThresholdConfig};
use sitecheck::report::REPORT_HEADER;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the given URL and report path
fn create_test_config(url: &str, report_path: &str) -> Config {
    Config {
        site: SiteConfig {
            url: url.to_string(),
        },
        thresholds: ThresholdConfig::default(),
        output: OutputConfig {
            report_path: report_path.to_string(),
        },
    }
}

/// Mounts a GET / mock serving the given HTML
async fn serve_page(server: &MockServer, html: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_audit_minimal_document() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "<html><head></head><body><img src=\"data:image/png;base64,AAAA\"></body></html>",
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        report_path.to_str().unwrap(),
    );

    let count = run_audit(config).await.expect("audit failed");

    // Five findings from the minimal document, plus the security finding
    // because the mock server is plain http
    assert_eq!(count, 6);

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Page has no <title> element"));
    assert!(report.contains("Page has no meta description"));
    assert!(report.contains("Page has no heading elements"));
    assert!(report.contains("Image has no alt text"));
    assert!(report.contains("Site is not served over HTTPS"));
    assert!(report.contains("Page has no viewport meta tag"));
}

#[tokio::test]
async fn test_report_header_and_numbering() {
    let mock_server = MockServer::start().await;
    serve_page(&mock_server, "<html><head></head><body></body></html>").await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        report_path.to_str().unwrap(),
    );

    run_audit(config).await.expect("audit failed");

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with(REPORT_HEADER));
    assert!(report.contains("1. [SEO]"));

    // Evaluator order shows up as report order: SEO before Security before Mobile
    let seo = report.find("[SEO]").unwrap();
    let security = report.find("[Security]").unwrap();
    let mobile = report.find("[Mobile]").unwrap();
    assert!(seo < security);
    assert!(security < mobile);
}

#[tokio::test]
async fn test_clean_page_produces_empty_report() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "<html><head>\
         <title>A fine page</title>\
         <meta name=\"description\" content=\"Everything in order\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         </head><body><h1>Hello</h1><a href=\"/next\">next</a></body></html>",
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        report_path.to_str().unwrap(),
    );

    // The only finding left is the http scheme of the mock server
    let count = run_audit(config).await.expect("audit failed");
    assert_eq!(count, 1);

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Site is not served over HTTPS"));
    assert!(!report.contains("[SEO]"));
}

#[tokio::test]
async fn test_oversized_image_appears_in_report() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "<html><head>\
         <title>t</title>\
         <meta name=\"description\" content=\"d\">\
         <meta name=\"viewport\" content=\"width=device-width\">\
         </head><body><h1>h</h1><img src=\"/big.jpg\" alt=\"a big one\"></body></html>",
    )
    .await;

    Mock::given(method("HEAD"))
        .and(path("/big.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 300 * 1024]))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        report_path.to_str().unwrap(),
    );

    run_audit(config).await.expect("audit failed");

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Image is larger than 100 KB"));
    assert!(report.contains("Size: 300.0 KB"));
    assert!(report.contains("/big.jpg"));
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        "<html><head></head><body>\
         <img src=\"x.png\">\
         <a href=\"#top\">top</a>\
         <p style=\"color: #777; background-color: #fff\">dim</p>\
         </body></html>",
    )
    .await;
    Mock::given(method("HEAD"))
        .and(path("/x.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 200 * 1024]))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let url = format!("{}/", mock_server.uri());

    run_audit(create_test_config(&url, report_path.to_str().unwrap()))
        .await
        .expect("first audit failed");
    let first = std::fs::read(&report_path).unwrap();

    run_audit(create_test_config(&url, report_path.to_str().unwrap()))
        .await
        .expect("second audit failed");
    let second = std::fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_failure_writes_no_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        report_path.to_str().unwrap(),
    );

    let result = run_audit(config).await;
    assert!(result.is_err());
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_unreachable_site_fails() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.txt");
    let config = create_test_config("http://127.0.0.1:1/", report_path.to_str().unwrap());

    let result = run_audit(config).await;
    assert!(result.is_err());
    assert!(!report_path.exists());
}
