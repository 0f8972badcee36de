// Rust guideline compliant 2026-10-14

//! Command implementations for the Hunkwise CLI.

pub mod commit;
pub mod diff;
pub mod git_dir;
pub mod hook;
pub mod tag;
