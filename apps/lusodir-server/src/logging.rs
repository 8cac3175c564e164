//! Structured logging with tracing.
//!
//! `LUSODIR_LOG` (an `EnvFilter` directive) overrides the configured level.

use anyhow::anyhow;
use lusodir_core::config::LoggingSettings;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "LUSODIR_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    let level = parse_log_level(&settings.level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let registry = Registry::default().with(filter);
    let installed = if settings.json {
        registry.with(fmt::layer().json().with_target(true).with_file(true).with_line_number(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    installed.map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

pub fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(anyhow!("Invalid log level: {}. Use trace, debug, info, warn, or error", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }
}
