// Rust guideline compliant 2026-10-14

//! Install and uninstall of the `prepare-commit-msg` hook.
//!
//! The hook lives at `<git rev-parse --git-path hooks>/prepare-commit-msg`.
//! Only its existence is tracked: install refuses to overwrite, uninstall
//! refuses to act on a missing file.

use crate::error::{HookError, Result};
use crate::template::{EmbeddedTemplates, TemplateRenderer};
use hunkwise_core::{Command, GitRunner};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Hook file name, also the name of the template rendered into it.
pub const HOOK_PREPARE_COMMIT_MESSAGE: &str = "prepare-commit-msg";

/// Whether the hook file is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// No hook file at the target path.
    Absent,
    /// A file exists at the target path.
    Present,
}

/// Manages the hook file for one repository.
#[derive(Debug)]
pub struct HookManager<'a, R, T = EmbeddedTemplates> {
    command: &'a Command<R>,
    templates: T,
}

impl<'a, R: GitRunner> HookManager<'a, R, EmbeddedTemplates> {
    /// Uses the embedded templates.
    pub fn new(command: &'a Command<R>) -> Self {
        Self::with_templates(command, EmbeddedTemplates)
    }
}

impl<'a, R: GitRunner, T: TemplateRenderer> HookManager<'a, R, T> {
    /// Uses a custom template renderer.
    pub fn with_templates(command: &'a Command<R>, templates: T) -> Self {
        Self { command, templates }
    }

    /// Resolves the hook file path.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot report the hooks directory.
    pub fn target(&self) -> Result<PathBuf> {
        let hooks = self.command.hooks_path()?;
        let hooks = PathBuf::from(hooks.trim());
        let hooks = match self.command.runner().work_dir() {
            Some(dir) => dir.join(hooks),
            None => hooks,
        };
        Ok(hooks.join(HOOK_PREPARE_COMMIT_MESSAGE))
    }

    /// Reports whether the hook file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be resolved.
    pub fn state(&self) -> Result<HookState> {
        Ok(if self.target()?.is_file() {
            HookState::Present
        } else {
            HookState::Absent
        })
    }

    /// Writes the rendered hook with mode 0755.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The hooks directory cannot be resolved
    /// - The hook file already exists ([`HookError::AlreadyExists`])
    /// - The template cannot be rendered
    /// - The file cannot be written
    pub fn install(&self) -> Result<PathBuf> {
        let target = self.target()?;
        if target.is_file() {
            return Err(HookError::AlreadyExists(target));
        }

        let content = self.templates.render(HOOK_PREPARE_COMMIT_MESSAGE)?;
        write_executable(&target, &content)?;
        tracing::debug!(path = %target.display(), "installed hook");
        Ok(target)
    }

    /// Removes the hook file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The hooks directory cannot be resolved
    /// - The hook file does not exist ([`HookError::NotFound`])
    /// - The file cannot be removed
    pub fn uninstall(&self) -> Result<PathBuf> {
        let target = self.target()?;
        if !target.is_file() {
            return Err(HookError::NotFound(target));
        }

        fs::remove_file(&target)?;
        tracing::debug!(path = %target.display(), "removed hook");
        Ok(target)
    }
}

fn write_executable(path: &std::path::Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;

    // The creation mode is subject to the umask.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

/// Hook operations on a [`Command`], using the embedded templates.
pub trait CommandHooks {
    /// Installs the `prepare-commit-msg` hook.
    ///
    /// # Errors
    ///
    /// See [`HookManager::install`].
    fn install_hook(&self) -> Result<()>;

    /// Uninstalls the `prepare-commit-msg` hook.
    ///
    /// # Errors
    ///
    /// See [`HookManager::uninstall`].
    fn uninstall_hook(&self) -> Result<()>;
}

impl<R: GitRunner> CommandHooks for Command<R> {
    fn install_hook(&self) -> Result<()> {
        HookManager::new(self).install().map(|_| ())
    }

    fn uninstall_hook(&self) -> Result<()> {
        HookManager::new(self).uninstall().map(|_| ())
    }
}
