//! Audit module for page fetching, parsing, and orchestration
//!
//! This module contains:
//! - HTTP fetching (page GET, per-image HEAD)
//! - The parsed-document wrapper with element helpers
//! - Overall audit coordination

mod coordinator;
mod document;
mod fetcher;

pub use coordinator::{run_audit, Auditor};
pub use document::{hierarchy_path, inline_style, Document};
pub use fetcher::{build_http_client, fetch_page, head_content_length};
