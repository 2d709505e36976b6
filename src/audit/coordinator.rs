//! Audit coordinator - main audit orchestration logic
//!
//! Sequences the whole run: fetch the page, parse it, run the six checks in
//! their fixed order, and write the report. Any fetch, parse, or write failure
//! propagates to the caller; no partial report is written.

use crate::audit::document::Document;
use crate::audit::fetcher::{build_http_client, fetch_page};
use crate::checks;
use crate::config::Config;
use crate::report::write_report;
use crate::AuditError;
use reqwest::Client;
use std::path::Path;

/// Main auditor structure
pub struct Auditor {
    config: Config,
    client: Client,
}

impl Auditor {
    /// Creates a new auditor for the given configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The audit configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Auditor)` - Successfully created auditor
    /// * `Err(AuditError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, AuditError> {
        let client = build_http_client()?;
        Ok(Self { config, client })
    }

    /// Runs the full audit
    ///
    /// 1. Fetches the configured page
    /// 2. Parses the HTML
    /// 3. Runs every check in report order
    /// 4. Writes the plain-text report, overwriting any previous one
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of findings written to the report
    /// * `Err(AuditError)` - Fetch or report write failed
    pub async fn run(&self) -> Result<usize, AuditError> {
        tracing::info!("Fetching {}", self.config.site.url);
        let body = fetch_page(&self.client, &self.config.site.url).await?;
        tracing::debug!("Fetched {} bytes", body.len());

        let document = Document::parse(&body);

        let findings = checks::run_all(&document, &self.client, &self.config).await;
        tracing::info!("Checks produced {} finding(s)", findings.len());

        let report_path = Path::new(&self.config.output.report_path);
        write_report(report_path, &findings)?;
        tracing::info!("Report written to {}", report_path.display());

        Ok(findings.len())
    }
}

/// Runs a complete audit for the given configuration
///
/// This is the main library entry point used by the CLI.
///
/// # Arguments
///
/// * `config` - The audit configuration
///
/// # Returns
///
/// * `Ok(usize)` - Number of findings written to the report
/// * `Err(AuditError)` - The audit failed before a report could be written
pub async fn run_audit(config: Config) -> Result<usize, AuditError> {
    Auditor::new(config)?.run().await
}
