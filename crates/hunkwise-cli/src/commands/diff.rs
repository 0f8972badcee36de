// Rust guideline compliant 2026-10-14

//! Implementation of the `hunkwise diff` command.
//!
//! Prints the full diff of the selected change-set.

use anyhow::Result;
use hunkwise_core::{Command, GitRunner};

/// Returns the diff text for the configured mode.
///
/// # Errors
///
/// Returns an error if nothing is staged or git fails.
pub fn execute<R: GitRunner>(command: &Command<R>) -> Result<String> {
    Ok(command.diff_files()?)
}
