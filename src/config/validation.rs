use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks performed:
/// - `site.url` must be a parseable absolute URL (any scheme; the security
///   check reports non-https rather than rejecting it here)
/// - `thresholds.max-image-size-kb` must be greater than zero
/// - `output.report-path` must be non-empty
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - The first validation failure found
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if Url::parse(&config.site.url).is_err() {
        return Err(ConfigError::InvalidUrl(config.site.url.clone()));
    }

    if config.thresholds.max_image_size_kb == 0 {
        return Err(ConfigError::Validation(
            "max-image-size-kb must be greater than 0".to_string(),
        ));
    }

    if config.output.report_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "report-path must not be empty".to_string(),
        ));
    }

    Ok(())
}
