//! Performance check
//!
//! Flags render-blocking scripts and oversized images. The image check issues
//! one HEAD request per image; all of them run concurrently and are fully
//! awaited before the check returns, so every result makes it into the
//! report.

use crate::audit::{head_content_length, Document};
use crate::config::Config;
use crate::report::{format_bytes, Category, Finding};
use futures::future::join_all;
use reqwest::Client;
use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script[src]").expect("script selector is valid"));

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").expect("img selector is valid"));

static BASE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("base[href]").expect("base selector is valid"));

/// Runs the performance check
pub async fn check(doc: &Document, client: &Client, config: &Config) -> Vec<Finding> {
    let mut findings = check_blocking_scripts(doc);
    findings.extend(check_image_sizes(doc, client, config).await);
    findings
}

/// Flags `<script src>` elements that have neither `async` nor `defer`
fn check_blocking_scripts(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for script in doc.select(&SCRIPT_SELECTOR) {
        let value = script.value();
        if value.attr("async").is_some() || value.attr("defer").is_some() {
            continue;
        }

        let mut finding = Finding::new(
            Category::Performance,
            "Script loads synchronously and blocks rendering",
            "Add the async or defer attribute to the script tag",
            doc.locate(&script),
        );
        if let Some(src) = value.attr("src") {
            finding = finding.with_resource(src);
        }
        findings.push(finding);
    }

    findings
}

/// Flags images whose HEAD Content-Length exceeds the configured threshold
///
/// Relative image URLs resolve against the document base: the first
/// `<base href>` when present, otherwise the configured site URL. Data URIs
/// are skipped. A failed HEAD request skips the image (logged by the
/// fetcher); only a reported Content-Length strictly greater than kb × 1024
/// produces a finding. Per-image requests fan out concurrently; the whole set
/// is awaited and merged in document order before returning.
async fn check_image_sizes(doc: &Document, client: &Client, config: &Config) -> Vec<Finding> {
    let site_url = match Url::parse(&config.site.url) {
        Ok(url) => url,
        Err(e) => {
            // Config validation should have caught this; without a base URL
            // relative images cannot be resolved, so skip the whole check
            tracing::warn!("Cannot parse site URL {}: {}", config.site.url, e);
            return Vec::new();
        }
    };
    let base_url = document_base(doc, &site_url);

    let threshold_bytes = config.thresholds.max_image_size_bytes();
    let threshold_kb = config.thresholds.max_image_size_kb;

    let mut candidates = Vec::new();
    for img in doc.select(&IMG_SELECTOR) {
        let src = match img.value().attr("src") {
            Some(src) if !src.starts_with("data:") => src,
            _ => continue,
        };

        let resolved = match base_url.join(src) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Cannot resolve image URL {}: {}", src, e);
                continue;
            }
        };

        // Capture the location before the async fan-out so futures do not
        // borrow the document
        candidates.push((resolved, doc.locate(&img)));
    }

    let checks = candidates.into_iter().map(|(resource, location)| async move {
        let length = head_content_length(client, &resource).await?;
        if length > threshold_bytes {
            Some(
                Finding::new(
                    Category::Performance,
                    format!("Image is larger than {} KB", threshold_kb),
                    "Compress the image or serve a scaled-down version",
                    location,
                )
                .with_resource(resource)
                .with_size(format_bytes(length)),
            )
        } else {
            None
        }
    });

    join_all(checks).await.into_iter().flatten().collect()
}

/// Resolves the document base URL
///
/// The first `<base href>` element wins, resolved against the site URL (a
/// relative base is itself base-relative, per HTML). An unparseable base
/// falls back to the site URL.
fn document_base(doc: &Document, site_url: &Url) -> Url {
    let href = doc
        .select(&BASE_SELECTOR)
        .next()
        .and_then(|base| base.value().attr("href"));

    match href {
        Some(href) => match site_url.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot resolve <base href> {}: {}", href, e);
                site_url.clone()
            }
        },
        None => site_url.clone(),
    }
}
