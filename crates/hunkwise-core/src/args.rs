// Rust guideline compliant 2026-10-14

//! Argument construction for git invocations.
//!
//! Everything here is pure: a [`Config`] and a [`DiffMode`] go in, an argument
//! vector (without the `git` program name) comes out.

use crate::config::Config;
use crate::tags::TagPair;

/// Pathspec magic that excludes a pattern relative to the repository top.
const EXCLUDE_MAGIC: &str = ":(exclude,top)";

/// Which change-set a diff covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffMode {
    /// Between two tags, newest first.
    TagRange(TagPair),
    /// The last commit against its parent.
    Amend,
    /// The index against `HEAD`.
    Staged,
}

impl DiffMode {
    /// Selects a mode from the configuration and an already-resolved tag pair.
    ///
    /// A pair only counts when a tag prefix is configured; without one the
    /// amend flag decides between [`DiffMode::Amend`] and [`DiffMode::Staged`].
    #[must_use]
    pub fn select(config: &Config, tags: Option<TagPair>) -> Self {
        if !config.diff_tag_prefix().is_empty() {
            if let Some(pair) = tags {
                return Self::TagRange(pair);
            }
        }
        if config.is_amend() {
            Self::Amend
        } else {
            Self::Staged
        }
    }

    /// The range arguments for this mode.
    #[must_use]
    pub fn range_args(&self) -> Vec<String> {
        match self {
            Self::TagRange(pair) => vec![pair.newer().to_string(), pair.older().to_string()],
            Self::Amend => vec!["HEAD^".to_string(), "HEAD".to_string()],
            Self::Staged => vec!["--staged".to_string()],
        }
    }
}

/// One `:(exclude,top)` pathspec per configured exclusion, in order.
#[must_use]
pub fn exclude_pathspecs(config: &Config) -> Vec<String> {
    config
        .exclude_list()
        .iter()
        .map(|pattern| format!("{EXCLUDE_MAGIC}{pattern}"))
        .collect()
}

/// `diff --name-only <range> <exclusions>`.
#[must_use]
pub fn diff_names(config: &Config, mode: &DiffMode) -> Vec<String> {
    let mut args = vec!["diff".to_string(), "--name-only".to_string()];
    args.extend(mode.range_args());
    args.extend(exclude_pathspecs(config));
    args
}

/// `diff --ignore-all-space --diff-algorithm=minimal --unified=<n> <range> <exclusions>`.
#[must_use]
pub fn diff_files(config: &Config, mode: &DiffMode) -> Vec<String> {
    let mut args = vec![
        "diff".to_string(),
        "--ignore-all-space".to_string(),
        "--diff-algorithm=minimal".to_string(),
        format!("--unified={}", config.diff_unified()),
    ];
    args.extend(mode.range_args());
    args.extend(exclude_pathspecs(config));
    args
}

/// `commit --no-verify --signoff --message=<message> [--amend]`.
#[must_use]
pub fn commit(config: &Config, message: &str) -> Vec<String> {
    let mut args = vec![
        "commit".to_string(),
        "--no-verify".to_string(),
        "--signoff".to_string(),
        format!("--message={message}"),
    ];
    if config.is_amend() {
        args.push("--amend".to_string());
    }
    args
}

/// `rev-parse --git-dir`.
#[must_use]
pub fn git_dir() -> Vec<String> {
    vec!["rev-parse".to_string(), "--git-dir".to_string()]
}

/// `rev-parse --git-path hooks`.
#[must_use]
pub fn hooks_path() -> Vec<String> {
    vec![
        "rev-parse".to_string(),
        "--git-path".to_string(),
        "hooks".to_string(),
    ]
}

/// `tag --sort=-creatordate`.
#[must_use]
pub fn list_tags() -> Vec<String> {
    vec!["tag".to_string(), "--sort=-creatordate".to_string()]
}
