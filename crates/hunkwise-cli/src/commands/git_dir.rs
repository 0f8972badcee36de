// Rust guideline compliant 2026-10-14

//! Implementation of the `hunkwise git-dir` command.

use anyhow::Result;
use hunkwise_core::{Command, GitRunner};

/// Returns the git directory path without the trailing newline.
///
/// # Errors
///
/// Returns an error if git fails.
pub fn execute<R: GitRunner>(command: &Command<R>) -> Result<String> {
    Ok(command.git_dir()?.trim_end().to_string())
}
