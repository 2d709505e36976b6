//! Security check
//!
//! Flags a site that is not configured with an https URL. This is a string
//! check on the configured URL, not on the scheme actually negotiated after
//! redirects; the audited page is never re-inspected for its final transport.

use crate::report::{Category, Finding, Location};

/// Runs the security check against the configured site URL
pub fn check(site_url: &str) -> Vec<Finding> {
    if site_url.starts_with("https://") {
        return Vec::new();
    }

    vec![Finding::new(
        Category::Security,
        "Site is not served over HTTPS",
        "Serve the site via HTTPS with a valid certificate",
        Location::SiteUrl,
    )
    .with_resource(site_url)]
}
