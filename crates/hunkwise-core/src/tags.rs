// Rust guideline compliant 2026-10-14

//! Resolution of the two most recent tags sharing a prefix.

use crate::args;
use crate::runner::GitRunner;

/// Two tag names, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    newer: String,
    older: String,
}

impl TagPair {
    /// Creates a pair from the newer and the older tag.
    pub fn new(newer: impl Into<String>, older: impl Into<String>) -> Self {
        Self {
            newer: newer.into(),
            older: older.into(),
        }
    }

    /// The more recently created tag.
    #[must_use]
    pub fn newer(&self) -> &str {
        &self.newer
    }

    /// The tag created before [`TagPair::newer`].
    #[must_use]
    pub fn older(&self) -> &str {
        &self.older
    }

    /// Parses a single space-separated line.
    ///
    /// Only exactly two non-empty tokens form a pair.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.as_slice() {
            [newer, older] if !newer.is_empty() && !older.is_empty() => {
                Some(Self::new(*newer, *older))
            }
            _ => None,
        }
    }
}

/// Filters a newest-first tag listing down to `prefix` matches, keeps at most
/// two, and joins them with a single space.
#[must_use]
pub fn latest_two(listing: &str, prefix: &str) -> String {
    listing
        .lines()
        .filter(|tag| tag.starts_with(prefix))
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lists tags through `runner` and resolves the newest pair for `prefix`.
///
/// Any failure to list tags resolves to `None`, as does any listing without
/// exactly two matches.
pub fn resolve<R: GitRunner + ?Sized>(runner: &R, prefix: &str) -> Option<TagPair> {
    let listing = match runner.run(&args::list_tags()) {
        Ok(listing) => listing,
        Err(err) => {
            tracing::debug!(%prefix, error = %err, "tag listing failed");
            return None;
        }
    };
    let joined = latest_two(&listing, prefix);
    tracing::debug!(%prefix, tags = %joined, "resolved latest tags");
    TagPair::parse(&joined)
}
