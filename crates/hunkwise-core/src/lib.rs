// Rust guideline compliant 2026-10-14

//! Hunkwise Core Library
//!
//! This crate wraps the external `git` executable for commit-message workflows:
//! - Configuration options (ordered, last writer wins)
//! - Diff mode selection (tag range, amend, staged)
//! - Argument construction for name listings, full diffs and commits
//! - Tag resolution for the two most recent tags sharing a prefix
//! - File and environment backed settings
//! - Error types and result handling

pub mod args;
pub mod command;
pub mod config;
pub mod error;
pub mod runner;
pub mod settings;
pub mod tags;

pub use args::DiffMode;
pub use command::Command;
pub use config::{
    with_commit_id, with_diff_list, with_diff_tag_prefix, with_diff_unified, with_enable_amend,
    with_exclude_list, Config, ConfigOption, DEFAULT_DIFF_UNIFIED, EXCLUDE_FROM_DIFF,
};
pub use error::{Error, Result};
pub use runner::{GitRunner, SystemGit};
pub use settings::Settings;
pub use tags::TagPair;
