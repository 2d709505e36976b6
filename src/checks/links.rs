//! Broken-links check
//!
//! Flags anchors whose href is exactly empty or points only at a fragment.
//! No requests are made; this is a static check on the href value.

use crate::audit::Document;
use crate::report::{Category, Finding};
use scraper::Selector;
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Runs the broken-links check
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for anchor in doc.select(&ANCHOR_SELECTOR) {
        let href = anchor.value().attr("href").unwrap_or("");

        if href.is_empty() {
            findings.push(Finding::new(
                Category::Link,
                "Link has an empty href",
                "Point the link at a real destination URL",
                doc.locate(&anchor),
            ));
        } else if href.starts_with('#') {
            findings.push(
                Finding::new(
                    Category::Link,
                    "Link points only at a page fragment",
                    "Point the link at a real destination URL",
                    doc.locate(&anchor),
                )
                .with_resource(href),
            );
        }
    }

    findings
}
