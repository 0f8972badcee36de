// Rust guideline compliant 2026-10-14

//! Execution of the external `git` binary.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command as Process;

/// Runs git with an argument vector and returns its raw standard output.
pub trait GitRunner {
    /// Executes `git <args>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or exits non-zero.
    fn run(&self, args: &[String]) -> Result<String>;

    /// Directory git runs in; relative paths printed by git resolve against it.
    fn work_dir(&self) -> Option<&Path> {
        None
    }
}

/// Spawns a real git process for each call.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Uses `git` from `PATH` in the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
            work_dir: None,
        }
    }

    /// Uses a specific git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Runs every invocation from `dir`.
    #[must_use]
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    fn render(&self, args: &[String]) -> String {
        let mut line = self.program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[String]) -> Result<String> {
        let command = self.render(args);
        tracing::debug!(%command, "running git");

        let mut process = Process::new(&self.program);
        process.args(args);
        if let Some(dir) = &self.work_dir {
            process.current_dir(dir);
        }

        let output = process
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Execution {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[String]) -> Result<String> {
        (**self).run(args)
    }

    fn work_dir(&self) -> Option<&Path> {
        (**self).work_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_joins_arguments() {
        let git = SystemGit::new();
        let line = git.render(&["diff".to_string(), "--staged".to_string()]);
        assert_eq!(line, "git diff --staged");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let git = SystemGit::new().with_program("/nonexistent/hunkwise-git");
        let err = git.run(&["status".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }), "unexpected error: {err}");
    }

    #[test]
    fn test_failing_command_is_execution_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let git = SystemGit::new().with_work_dir(temp_dir.path());
        let args = ["rev-parse", "--verify", "refs/heads/nope"].map(String::from);
        let result = git.run(&args);
        match result {
            Err(Error::Execution { command, .. }) => {
                assert_eq!(command, "git rev-parse --verify refs/heads/nope");
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    }
}
