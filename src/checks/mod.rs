//! The six heuristic checks
//!
//! Each check is a stateless function over the parsed document producing a
//! list of findings; none depends on another's output. They run in a fixed
//! order that also defines the report layout: SEO, Performance,
//! Accessibility, Links, Security, Mobile. Adding a category means adding a
//! module here and one line in `run_all`.

pub mod accessibility;
pub mod color;
pub mod links;
pub mod mobile;
pub mod performance;
pub mod security;
pub mod seo;

use crate::audit::Document;
use crate::config::Config;
use crate::report::Finding;
use reqwest::Client;

/// Runs every check in report order and flattens the results
///
/// The performance check performs network I/O (per-image HEAD requests) and
/// is awaited to completion before the later checks run, so its findings
/// always appear in the report.
pub async fn run_all(doc: &Document, client: &Client, config: &Config) -> Vec<Finding> {
    let mut findings = seo::check(doc);
    findings.extend(performance::check(doc, client, config).await);
    findings.extend(accessibility::check(doc));
    findings.extend(links::check(doc));
    findings.extend(security::check(&config.site.url));
    findings.extend(mobile::check(doc));
    findings
}
