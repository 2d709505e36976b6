use serde::Deserialize;

/// Main configuration structure for sitecheck
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// URL of the page to audit
    pub url: String,
}

/// Check threshold configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    /// Images whose Content-Length exceeds this many kilobytes are flagged
    #[serde(rename = "max-image-size-kb", default = "default_max_image_size_kb")]
    pub max_image_size_kb: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the plain-text report file (overwritten each run)
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: String,
}

fn default_max_image_size_kb() -> u64 {
    100
}

fn default_report_path() -> String {
    "site-analysis-report.txt".to_string()
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_image_size_kb: default_max_image_size_kb(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

impl ThresholdConfig {
    /// The image size threshold expressed in bytes (kb × 1024)
    pub fn max_image_size_bytes(&self) -> u64 {
        self.max_image_size_kb * 1024
    }
}
