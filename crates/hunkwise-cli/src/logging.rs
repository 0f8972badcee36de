// Rust guideline compliant 2026-10-14

//! Tracing setup for the CLI.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable that overrides `--log-level`.
pub const LOG_ENV: &str = "HUNKWISE_LOG";

/// Installs a stderr subscriber at `level`, or at `HUNKWISE_LOG` when set.
///
/// # Errors
///
/// Returns an error if the level is not one of error, warn, info or debug.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = match std::env::var(LOG_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => parse_log_level(&from_env)?,
        _ => parse_log_level(level)?,
    };

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
