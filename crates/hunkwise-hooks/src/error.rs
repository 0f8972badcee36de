// Rust guideline compliant 2026-10-14

//! Error types for hook management.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Hook management errors.
#[derive(Debug, Error)]
pub enum HookError {
    /// Resolving the hooks directory through git failed.
    #[error(transparent)]
    Core(#[from] hunkwise_core::Error),

    /// Writing or removing the hook file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Install was requested but the hook file is already there.
    #[error("hook file prepare-commit-msg already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Uninstall was requested but there is no hook file.
    #[error("hook file prepare-commit-msg does not exist at {0}")]
    NotFound(PathBuf),

    /// No template is registered under the requested name.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}
