//! Report module for sitecheck
//!
//! This module holds the finding value types and the plain-text report
//! renderer/writer.

mod findings;
mod text;

pub use findings::{format_bytes, Category, Finding, Location};
pub use text::{format_report, write_report, REPORT_HEADER};
