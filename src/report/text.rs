//! Plain-text report generation
//!
//! Renders the flat finding list as a numbered plain-text report and writes it
//! to the configured path, fully overwriting any previous report.

use crate::report::findings::Finding;
use crate::AuditError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header line at the top of every report
pub const REPORT_HEADER: &str = "\u{1F50D} Site Analysis Report";

/// Formats the finding list as the full report text
///
/// Output is deterministic: the same findings in the same order always render
/// to byte-identical text, so repeated runs against an unchanged page produce
/// identical report files.
///
/// # Arguments
///
/// * `findings` - All findings, already in evaluator order
///
/// # Returns
///
/// The complete report as a single string
pub fn format_report(findings: &[Finding]) -> String {
    let mut out = String::new();

    out.push_str(REPORT_HEADER);
    out.push_str("\n\n");

    if findings.is_empty() {
        out.push_str("No issues found.\n");
        return out;
    }

    for (index, finding) in findings.iter().enumerate() {
        out.push_str(&format!("{}. [{}] {}\n", index + 1, finding.category, finding.issue));
        out.push_str(&format!("   Solution: {}\n", finding.solution));
        out.push_str(&format!("   Location: {}\n", finding.location));

        // Optional fields in fixed order
        if let Some(resource) = &finding.resource {
            out.push_str(&format!("   Resource: {}\n", resource));
        }
        if let Some(hierarchy) = &finding.hierarchy {
            out.push_str(&format!("   Hierarchy: {}\n", hierarchy));
        }
        if let Some(size) = &finding.size {
            out.push_str(&format!("   Size: {}\n", size));
        }
        if let Some(ratio) = finding.contrast_ratio {
            out.push_str(&format!("   Contrast ratio: {:.2}\n", ratio));
        }

        out.push('\n');
    }

    out
}

/// Writes the report to the given path, overwriting any existing file
///
/// # Arguments
///
/// * `path` - Report file path
/// * `findings` - All findings, already in evaluator order
///
/// # Returns
///
/// * `Ok(())` - Report written
/// * `Err(AuditError::Report)` - The file could not be created or written
pub fn write_report(path: &Path, findings: &[Finding]) -> Result<(), AuditError> {
    let text = format_report(findings);

    let to_report_err = |source: std::io::Error| AuditError::Report {
        path: path.display().to_string(),
        source,
    };

    let mut file = File::create(path).map_err(to_report_err)?;
    file.write_all(text.as_bytes()).map_err(to_report_err)?;

    Ok(())
}
