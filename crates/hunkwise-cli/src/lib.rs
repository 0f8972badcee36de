// Rust guideline compliant 2026-10-14

//! Hunkwise CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;
pub mod logging;

pub use context::{build_command, DiffArgs};
pub use logging::{init_tracing, parse_log_level};
