// Rust guideline compliant 2026-10-14

//! Hook script templates.

use crate::error::{HookError, Result};

const PREPARE_COMMIT_MSG: &str = include_str!("../templates/prepare-commit-msg");

/// Renders a named template into file content.
pub trait TemplateRenderer {
    /// Returns the rendered bytes for `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is unknown or rendering fails.
    fn render(&self, name: &str) -> Result<Vec<u8>>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, name: &str) -> Result<Vec<u8>> {
        match name {
            "prepare-commit-msg" => Ok(PREPARE_COMMIT_MSG.replace("\r\n", "\n").into_bytes()),
            other => Err(HookError::TemplateNotFound(other.to_string())),
        }
    }
}
