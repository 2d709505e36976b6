//! Mobile-friendliness check
//!
//! Flags documents without a viewport meta tag.

use crate::audit::Document;
use crate::report::{Category, Finding, Location};
use scraper::Selector;
use std::sync::LazyLock;

static VIEWPORT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='viewport']").expect("viewport selector is valid")
});

/// Runs the mobile check
pub fn check(doc: &Document) -> Vec<Finding> {
    if doc.select(&VIEWPORT_SELECTOR).next().is_some() {
        return Vec::new();
    }

    vec![Finding::new(
        Category::Mobile,
        "Page has no viewport meta tag",
        "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> to <head>",
        Location::Head,
    )]
}
