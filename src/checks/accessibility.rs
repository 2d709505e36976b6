//! Accessibility check
//!
//! Flags images without alt text and inline-styled elements whose text and
//! background colors fall below the WCAG AA contrast ratio for normal text.

use crate::audit::{hierarchy_path, inline_style, Document};
use crate::checks::color::{contrast_ratio, parse_color};
use crate::report::{Category, Finding};
use scraper::Selector;
use std::sync::LazyLock;

/// WCAG AA contrast threshold for normal-size text
const MIN_CONTRAST_RATIO: f64 = 4.5;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("img selector is valid"));

static STYLED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[style]").expect("style selector is valid"));

/// Runs the accessibility check
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = check_alt_text(doc);
    findings.extend(check_contrast(doc));
    findings
}

/// Flags `<img>` elements without a non-empty `alt` attribute
///
/// An explicit `alt=""` counts as missing.
fn check_alt_text(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for img in doc.select(&IMG_SELECTOR) {
        let has_alt = img.value().attr("alt").is_some_and(|alt| !alt.is_empty());
        if has_alt {
            continue;
        }

        let mut finding = Finding::new(
            Category::Accessibility,
            "Image has no alt text",
            "Add a descriptive alt attribute to the image",
            doc.locate(&img),
        )
        .with_hierarchy(hierarchy_path(&img));
        if let Some(src) = img.value().attr("src") {
            finding = finding.with_resource(src);
        }
        findings.push(finding);
    }

    findings
}

/// Flags elements whose inline text and background colors contrast below 4.5
///
/// Only inline `style` declarations are considered; elements missing either
/// color, or using a notation the parser does not recognize, are skipped.
/// A ratio of exactly 4.5 passes.
fn check_contrast(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for element in doc.select(&STYLED_SELECTOR) {
        let foreground = inline_style(&element, "color").and_then(|v| parse_color(&v));
        let background = inline_style(&element, "background-color").and_then(|v| parse_color(&v));

        let (foreground, background) = match (foreground, background) {
            (Some(fg), Some(bg)) => (fg, bg),
            _ => continue,
        };

        let ratio = contrast_ratio(foreground, background);
        if ratio < MIN_CONTRAST_RATIO {
            findings.push(
                Finding::new(
                    Category::Accessibility,
                    "Low contrast between text and background colors",
                    "Increase the color contrast to at least 4.5:1",
                    doc.locate(&element),
                )
                .with_hierarchy(hierarchy_path(&element))
                .with_contrast_ratio(ratio),
            );
        }
    }

    findings
}
