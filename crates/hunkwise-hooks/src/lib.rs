// Rust guideline compliant 2026-10-14

//! Hunkwise Git Hooks
//!
//! This crate manages the `prepare-commit-msg` hook for Hunkwise:
//! - Embedded hook templates
//! - Install and uninstall of the hook file
//! - Hook methods on [`hunkwise_core::Command`]

pub mod error;
pub mod manager;
pub mod template;

pub use error::{HookError, Result};
pub use manager::{CommandHooks, HookManager, HookState, HOOK_PREPARE_COMMIT_MESSAGE};
pub use template::{EmbeddedTemplates, TemplateRenderer};
