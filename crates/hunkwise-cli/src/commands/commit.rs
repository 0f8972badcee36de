// Rust guideline compliant 2026-10-14

//! Implementation of the `hunkwise commit` command.

use anyhow::{Context, Result};
use hunkwise_core::{Command, GitRunner};
use std::io::Read;

/// Commits with `message`, or with the contents of `message_file`.
///
/// A `message_file` of `-` reads the message from stdin.
///
/// # Errors
///
/// Returns an error if:
/// - Neither or both message sources are given
/// - The message file cannot be read
/// - The message is empty
/// - git fails
pub fn execute<R: GitRunner>(
    command: &Command<R>,
    message: Option<String>,
    message_file: Option<String>,
) -> Result<String> {
    let message = match (message, message_file) {
        (Some(message), None) => message,
        (None, Some(path)) => read_message(&path)?,
        (Some(_), Some(_)) => anyhow::bail!("Use either --message or --file, not both"),
        (None, None) => anyhow::bail!("A commit message is required (--message or --file)"),
    };

    let message = message.trim_end();
    if message.is_empty() {
        anyhow::bail!("Commit message is empty");
    }

    Ok(command.commit(message)?)
}

fn read_message(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read commit message from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}
