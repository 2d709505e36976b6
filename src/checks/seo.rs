//! SEO check
//!
//! Flags a missing or overlong `<title>`, a missing or overlong meta
//! description, and documents without any heading element.

use crate::audit::Document;
use crate::report::{Category, Finding, Location};
use scraper::Selector;
use std::sync::LazyLock;

/// Titles longer than this many characters are flagged
const MAX_TITLE_CHARS: usize = 60;

/// Meta descriptions longer than this many characters are flagged
const MAX_DESCRIPTION_CHARS: usize = 160;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[name='description']").expect("description selector is valid")
});

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector is valid"));

/// Runs the SEO check
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_title(doc, &mut findings);
    check_description(doc, &mut findings);
    check_headings(doc, &mut findings);

    findings
}

fn check_title(doc: &Document, findings: &mut Vec<Finding>) {
    match doc.select(&TITLE_SELECTOR).next() {
        None => findings.push(Finding::new(
            Category::Seo,
            "Page has no <title> element",
            "Add a concise, descriptive <title> inside <head>",
            Location::Head,
        )),
        Some(title) => {
            let text: String = title.text().collect::<String>().trim().to_string();
            // Strictly greater than: a 60-character title is fine
            if text.chars().count() > MAX_TITLE_CHARS {
                findings.push(Finding::new(
                    Category::Seo,
                    format!("Title is longer than {} characters", MAX_TITLE_CHARS),
                    format!("Shorten the title to at most {} characters", MAX_TITLE_CHARS),
                    doc.locate(&title),
                ));
            }
        }
    }
}

fn check_description(doc: &Document, findings: &mut Vec<Finding>) {
    match doc.select(&DESCRIPTION_SELECTOR).next() {
        None => findings.push(Finding::new(
            Category::Seo,
            "Page has no meta description",
            "Add a <meta name=\"description\"> tag inside <head>",
            Location::Head,
        )),
        Some(meta) => {
            let content = meta.value().attr("content").unwrap_or("");
            if content.chars().count() > MAX_DESCRIPTION_CHARS {
                findings.push(Finding::new(
                    Category::Seo,
                    format!(
                        "Meta description is longer than {} characters",
                        MAX_DESCRIPTION_CHARS
                    ),
                    format!(
                        "Shorten the description to at most {} characters",
                        MAX_DESCRIPTION_CHARS
                    ),
                    doc.locate(&meta),
                ));
            }
        }
    }
}

fn check_headings(doc: &Document, findings: &mut Vec<Finding>) {
    if doc.select(&HEADING_SELECTOR).next().is_none() {
        findings.push(Finding::new(
            Category::Seo,
            "Page has no heading elements (h1-h6)",
            "Structure the content with headings, starting with a single <h1>",
            Location::Document,
        ));
    }
}
