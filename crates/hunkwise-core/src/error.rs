// Rust guideline compliant 2026-10-14

//! Error types for the Hunkwise core library.

use thiserror::Error;

/// Result type alias for Hunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hunkwise operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The git process could not be started.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The git process exited unsuccessfully.
    #[error("{command} failed ({status}): {stderr}")]
    Execution {
        /// Rendered command line.
        command: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The name listing came back empty.
    #[error("please add your staged changes using git add <files...>")]
    NothingStaged,

    /// Invalid settings file or environment override.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
