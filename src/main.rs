//! Sitecheck main entry point
//!
//! This is the command-line interface for the sitecheck single-page auditor.

use clap::Parser;
use sitecheck::audit::run_audit;
use sitecheck::config::load_config_with_hash;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitecheck: a single-page site audit tool
///
/// Sitecheck fetches a single web page, runs a fixed set of heuristic checks
/// (SEO, performance, accessibility, broken links, security, mobile) against
/// its HTML, and writes a plain-text report of the issues found.
#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version = "1.0.0")]
#[command(about = "A single-page site audit tool", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Auditing {}", config.site.url);

    match run_audit(config).await {
        Ok(count) => {
            tracing::info!("Audit completed with {} finding(s)", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitecheck=info,warn"),
            1 => EnvFilter::new("sitecheck=debug,info"),
            2 => EnvFilter::new("sitecheck=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
