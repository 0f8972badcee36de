// Rust guideline compliant 2026-10-14

//! The git command facade used by commit-message workflows.

use crate::args::{self, DiffMode};
use crate::config::{Config, ConfigOption};
use crate::error::{Error, Result};
use crate::runner::{GitRunner, SystemGit};
use crate::tags::{self, TagPair};

/// Diff, commit and repository queries over an immutable [`Config`].
#[derive(Debug, Clone)]
pub struct Command<R = SystemGit> {
    config: Config,
    runner: R,
}

impl Command<SystemGit> {
    /// Builds a command that runs `git` from `PATH` in the current directory.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        Self::with_runner(Config::new(options), SystemGit::new())
    }
}

impl<R: GitRunner> Command<R> {
    /// Builds a command over an explicit configuration and runner.
    pub fn with_runner(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    /// The frozen configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The runner used for every invocation.
    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Reports whether tag mode was requested, and the resolved tag pair.
    ///
    /// The flag is `true` whenever a tag prefix is configured, even if no
    /// usable pair was found; in that case both tags are empty.
    pub fn is_diff_tag(&self) -> (bool, String, String) {
        if self.config.diff_tag_prefix().is_empty() {
            return (false, String::new(), String::new());
        }
        match self.tag_pair() {
            Some(pair) => (true, pair.newer().to_string(), pair.older().to_string()),
            None => (true, String::new(), String::new()),
        }
    }

    /// Resolves the two most recent tags for the configured prefix.
    pub fn tag_pair(&self) -> Option<TagPair> {
        let prefix = self.config.diff_tag_prefix();
        if prefix.is_empty() {
            return None;
        }
        tags::resolve(&self.runner, prefix)
    }

    /// Selects the diff mode for this configuration.
    ///
    /// Resolves tags once when a prefix is configured.
    pub fn diff_mode(&self) -> DiffMode {
        let mode = DiffMode::select(&self.config, self.tag_pair());
        tracing::debug!(?mode, "selected diff mode");
        mode
    }

    /// Returns the full diff text for the selected change-set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either git invocation fails
    /// - The name listing is empty ([`Error::NothingStaged`])
    pub fn diff_files(&self) -> Result<String> {
        let mode = self.diff_mode();

        let names = self.runner.run(&args::diff_names(&self.config, &mode))?;
        if names.is_empty() {
            return Err(Error::NothingStaged);
        }

        self.runner.run(&args::diff_files(&self.config, &mode))
    }

    /// Commits with `message`, signed off and without running hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails.
    pub fn commit(&self, message: &str) -> Result<String> {
        self.runner.run(&args::commit(&self.config, message))
    }

    /// Path of the git directory, as printed by git (trailing newline included).
    ///
    /// # Errors
    ///
    /// Returns an error if git fails.
    pub fn git_dir(&self) -> Result<String> {
        self.runner.run(&args::git_dir())
    }

    /// Path of the hooks directory, as printed by git (trailing newline included).
    ///
    /// # Errors
    ///
    /// Returns an error if git fails.
    pub fn hooks_path(&self) -> Result<String> {
        self.runner.run(&args::hooks_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{with_diff_tag_prefix, with_enable_amend};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned outputs and records every argument vector.
    #[derive(Default)]
    struct ScriptedGit {
        replies: RefCell<VecDeque<Result<String>>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedGit {
        fn reply(self, output: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(output.to_string()));
            self
        }

        fn fail(self) -> Self {
            self.replies.borrow_mut().push_back(Err(Error::Execution {
                command: "git".to_string(),
                status: "exit status: 128".to_string(),
                stderr: "fatal: boom".to_string(),
            }));
            self
        }
    }

    impl GitRunner for ScriptedGit {
        fn run(&self, args: &[String]) -> Result<String> {
            self.calls.borrow_mut().push(args.to_vec());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    #[test]
    fn test_diff_files_nothing_staged() {
        let command = Command::with_runner(Config::default(), ScriptedGit::default().reply(""));
        let err = command.diff_files().unwrap_err();
        assert!(matches!(err, Error::NothingStaged));
        assert_eq!(command.runner().calls.borrow().len(), 1);
    }

    #[test]
    fn test_diff_files_trailing_newline_counts_as_output() {
        let git = ScriptedGit::default().reply("\n").reply("diff text");
        let command = Command::with_runner(Config::default(), git);
        assert_eq!(command.diff_files().unwrap(), "diff text");
    }

    #[test]
    fn test_diff_files_surfaces_failures() {
        let command = Command::with_runner(Config::default(), ScriptedGit::default().fail());
        assert!(matches!(
            command.diff_files().unwrap_err(),
            Error::Execution { .. }
        ));

        let git = ScriptedGit::default().reply("a.rs\n").fail();
        let command = Command::with_runner(Config::default(), git);
        assert!(matches!(
            command.diff_files().unwrap_err(),
            Error::Execution { .. }
        ));
    }

    #[test]
    fn test_is_diff_tag_without_prefix() {
        let command = Command::with_runner(Config::default(), ScriptedGit::default());
        assert_eq!(command.is_diff_tag(), (false, String::new(), String::new()));
        assert!(command.runner().calls.borrow().is_empty());
    }

    #[test]
    fn test_is_diff_tag_listing_failure_still_reports_requested() {
        let config = Config::new([with_diff_tag_prefix("v")]);
        let command = Command::with_runner(config, ScriptedGit::default().fail());
        assert_eq!(command.is_diff_tag(), (true, String::new(), String::new()));
    }

    #[test]
    fn test_tag_mode_diff_uses_range() {
        let config = Config::new([with_diff_tag_prefix("v"), with_enable_amend(true)]);
        let git = ScriptedGit::default()
            .reply("v1.2.0\nv1.1.0\n")
            .reply("a.rs\n")
            .reply("diff");
        let command = Command::with_runner(config, git);
        command.diff_files().unwrap();

        let calls = command.runner().calls.borrow();
        assert_eq!(calls[0], ["tag", "--sort=-creatordate"]);
        assert_eq!(&calls[1][..4], ["diff", "--name-only", "v1.2.0", "v1.1.0"]);
        assert_eq!(&calls[2][4..6], ["v1.2.0", "v1.1.0"]);
    }

    #[test]
    fn test_commit_and_queries() {
        let git = ScriptedGit::default().reply("ok").reply(".git\n").reply(".git/hooks\n");
        let command = Command::with_runner(Config::new([with_enable_amend(true)]), git);
        assert_eq!(command.commit("msg").unwrap(), "ok");
        assert_eq!(command.git_dir().unwrap(), ".git\n");
        assert_eq!(command.hooks_path().unwrap(), ".git/hooks\n");

        let calls = command.runner().calls.borrow();
        assert_eq!(
            calls[0],
            ["commit", "--no-verify", "--signoff", "--message=msg", "--amend"]
        );
        assert_eq!(calls[1], ["rev-parse", "--git-dir"]);
        assert_eq!(calls[2], ["rev-parse", "--git-path", "hooks"]);
    }
}
