// Rust guideline compliant 2026-10-14

//! Implementation of the `hunkwise hook` commands.

use anyhow::Result;
use hunkwise_core::{Command, GitRunner};
use hunkwise_hooks::HookManager;

/// Supported hook actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Install the prepare-commit-msg hook
    Install,
    /// Remove the prepare-commit-msg hook
    Uninstall,
}

/// Runs the requested hook action and describes the outcome.
///
/// # Errors
///
/// Returns an error if the hook is already installed (install), missing
/// (uninstall), or the filesystem or git fails.
pub fn execute<R: GitRunner>(command: &Command<R>, action: HookAction) -> Result<String> {
    let manager = HookManager::new(command);
    Ok(match action {
        HookAction::Install => {
            let path = manager.install()?;
            format!("Installed prepare-commit-msg hook at {}", path.display())
        }
        HookAction::Uninstall => {
            let path = manager.uninstall()?;
            format!("Removed prepare-commit-msg hook from {}", path.display())
        }
    })
}
