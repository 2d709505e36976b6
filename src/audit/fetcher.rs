//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the auditor:
//! - Building an HTTP client with a proper user agent string
//! - The single GET request that fetches the audited page
//! - HEAD requests used by the image-size check
//!
//! The page GET is fatal on failure and never retried; per-image HEAD
//! failures are logged and swallowed so the audit can continue.

use crate::AuditError;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("sitecheck/", env!("CARGO_PKG_VERSION"));

/// Hard per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for the whole audit run
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the audited page and returns its body as text
///
/// A single GET request with no retries. A non-2xx status, a network error,
/// or a timeout all abort the audit.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(AuditError)` - The request failed; classified as `Timeout`,
///   `HttpStatus`, or `Fetch`
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AuditError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AuditError::Timeout {
                url: url.to_string(),
            }
        } else {
            AuditError::Fetch {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuditError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| AuditError::Fetch {
        url: url.to_string(),
        source: e,
    })
}

/// Sends a HEAD request and reads the Content-Length header
///
/// Used by the image-size check. Any failure (network error, timeout,
/// non-2xx, missing or unparseable header) is logged at warn level and
/// collapses to `None`; the image is simply skipped.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The resource to check
///
/// # Returns
///
/// The Content-Length in bytes, or `None` if it could not be determined
pub async fn head_content_length(client: &Client, url: &str) -> Option<u64> {
    let response = match client.head(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("HEAD request failed for {}: {}", url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::warn!("HEAD request for {} returned {}", url, response.status());
        return None;
    }

    response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let body = fetch_page(&client, &format!("{}/", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let result = fetch_page(&client, &format!("{}/", server.uri())).await;
        assert!(matches!(
            result,
            Err(AuditError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_network_error() {
        // Nothing is listening on this port
        let client = build_http_client().unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:1/").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_head_content_length() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/image.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 204_800]))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let length = head_content_length(&client, &format!("{}/image.png", server.uri())).await;
        assert_eq!(length, Some(204_800));
    }

    #[tokio::test]
    async fn test_head_content_length_non_success_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/image.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let length = head_content_length(&client, &format!("{}/image.png", server.uri())).await;
        assert_eq!(length, None);
    }

    #[tokio::test]
    async fn test_head_content_length_error_is_none() {
        let client = build_http_client().unwrap();
        let length = head_content_length(&client, "http://127.0.0.1:1/image.png").await;
        assert_eq!(length, None);
    }
}
