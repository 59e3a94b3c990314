//! Shared logging setup for portal binaries.
//!
//! Logs go to stderr so stdout carries only command output.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "portal=info,portal_config=info,portal_sqon=info";
const VERBOSE_LOG_FILTER: &str = "portal=debug,portal_config=debug,portal_sqon=debug";

/// Logging configuration shared by portal binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
}

/// Choose the filter: `RUST_LOG` wins, then the verbose or default directives.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::new(DEFAULT_LOG_FILTER)
    }
}

/// Initialize tracing with a stderr writer.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.verbose)
                .with_filter(build_filter(config.verbose)),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging for {}: {}", config.app_name, e))?;

    tracing::debug!(app = config.app_name, "Logging initialized");
    Ok(())
}
