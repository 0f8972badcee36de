// Rust guideline compliant 2026-10-14

//! Implementation of the `hunkwise tag` command.
//!
//! Shows whether tag mode is on and which tags a diff would span.

use anyhow::Result;
use hunkwise_core::{Command, GitRunner};
use serde::Serialize;

/// Tag resolution as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    /// Whether a tag prefix is configured.
    pub is_tag_mode: bool,
    /// Newer tag, empty when unresolved.
    pub tag1: String,
    /// Older tag, empty when unresolved.
    pub tag2: String,
}

/// Resolves the tag pair for the configured prefix.
pub fn report<R: GitRunner>(command: &Command<R>) -> TagReport {
    let (is_tag_mode, tag1, tag2) = command.is_diff_tag();
    TagReport {
        is_tag_mode,
        tag1,
        tag2,
    }
}

/// Renders the report as JSON or plain text.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute<R: GitRunner>(command: &Command<R>, json: bool) -> Result<String> {
    let report = report(command);
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(match (report.is_tag_mode, report.tag1.is_empty() || report.tag2.is_empty()) {
        (false, _) => "tag mode off (no --tag-prefix)".to_string(),
        (true, true) => "tag mode on, fewer than two matching tags".to_string(),
        (true, false) => format!("{} {}", report.tag1, report.tag2),
    })
}
