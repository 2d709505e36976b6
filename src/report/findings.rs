//! Finding value types
//!
//! A `Finding` is one reported issue: category, description, suggested fix,
//! and a best-effort source location, plus a handful of category-specific
//! optional fields. Findings are immutable once built; a run only ever appends
//! them to one flat ordered list.

use std::fmt;

/// Check category a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Seo,
    Performance,
    Accessibility,
    Link,
    Security,
    Mobile,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Seo => "SEO",
            Category::Performance => "Performance",
            Category::Accessibility => "Accessibility",
            Category::Link => "Link",
            Category::Security => "Security",
            Category::Mobile => "Mobile",
        };
        write!(f, "{}", name)
    }
}

/// Best-effort source position of a finding
///
/// Line numbers are 1-based and come from a substring scan of the raw HTML
/// (see `Document::locate`), so they are a diagnostic aid, not a guarantee.
/// `NotFound` renders as "line 0", preserving the original tool's sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The issue concerns the document `<head>` as a whole
    Head,
    /// The issue concerns the document as a whole
    Document,
    /// The issue concerns the configured site URL, not the document
    SiteUrl,
    /// 1-based line number in the fetched HTML
    Line(usize),
    /// The element could not be matched back to a source line
    NotFound,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Head => write!(f, "document head"),
            Location::Document => write!(f, "document"),
            Location::SiteUrl => write!(f, "site URL"),
            Location::Line(n) => write!(f, "line {}", n),
            Location::NotFound => write!(f, "line 0"),
        }
    }
}

/// One reported issue
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Which evaluator produced the finding
    pub category: Category,
    /// Short description of what was detected
    pub issue: String,
    /// Suggested remediation
    pub solution: String,
    /// Best-effort source position
    pub location: Location,
    /// Offending URL or resource path, if any
    pub resource: Option<String>,
    /// Ancestor path of the offending element (accessibility findings)
    pub hierarchy: Option<String>,
    /// Human-formatted byte size (performance findings)
    pub size: Option<String>,
    /// WCAG contrast ratio (accessibility findings)
    pub contrast_ratio: Option<f64>,
}

impl Finding {
    /// Creates a finding with the four mandatory fields
    pub fn new(
        category: Category,
        issue: impl Into<String>,
        solution: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            category,
            issue: issue.into(),
            solution: solution.into(),
            location,
            resource: None,
            hierarchy: None,
            size: None,
            contrast_ratio: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: impl Into<String>) -> Self {
        self.hierarchy = Some(hierarchy.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_contrast_ratio(mut self, ratio: f64) -> Self {
        self.contrast_ratio = Some(ratio);
        self
    }
}

/// Formats a byte count for display (B / KB / MB, one decimal above bytes)
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
