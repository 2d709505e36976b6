//! Configuration module for sitecheck
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use sitecheck::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Auditing: {}", config.site.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SiteConfig, ThresholdConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
