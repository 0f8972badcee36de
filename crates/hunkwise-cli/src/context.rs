// Rust guideline compliant 2026-10-14

//! Construction of a [`Command`] from settings and command-line flags.

use anyhow::{Context, Result};
use hunkwise_core::{
    with_diff_tag_prefix, with_diff_unified, with_enable_amend, with_exclude_list, Command,
    Config, GitRunner, Settings, SystemGit,
};
use std::path::{Path, PathBuf};

/// Diff-shaping flags shared by every subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiffArgs {
    /// Lines of context in the full diff
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub unified: Option<i32>,

    /// Extra exclusion patterns (comma separated)
    #[arg(long, value_delimiter = ',', global = true)]
    pub exclude: Vec<String>,

    /// Diff and commit against the previous commit
    #[arg(long, global = true)]
    pub amend: bool,

    /// Diff the two most recent tags with this prefix
    #[arg(long, global = true)]
    pub tag_prefix: Option<String>,

    /// Settings file (defaults to .hunkwise.toml in the repository)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Builds a command running git in the current directory.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded.
pub fn build_command(args: &DiffArgs) -> Result<Command<SystemGit>> {
    let git = SystemGit::new();
    let root = repo_root(&git);
    let config = build_config(args, &root)?;
    Ok(Command::with_runner(config, git))
}

/// Resolves settings under `root` and layers the flags on top.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded.
pub fn build_config(args: &DiffArgs, root: &Path) -> Result<Config> {
    let settings = match &args.config {
        Some(path) => Settings::load_file(path),
        None => Settings::load(root),
    }
    .context("Failed to load settings")?;

    let mut options = settings.options();
    if let Some(unified) = args.unified {
        options.push(with_diff_unified(unified));
    }
    options.push(with_exclude_list(args.exclude.clone()));
    if args.amend {
        options.push(with_enable_amend(true));
    }
    if let Some(prefix) = &args.tag_prefix {
        options.push(with_diff_tag_prefix(prefix.clone()));
    }
    Ok(Config::new(options))
}

/// Repository top level, falling back to the current directory outside a repo.
fn repo_root<R: GitRunner>(git: &R) -> PathBuf {
    let args = ["rev-parse", "--show-toplevel"].map(String::from);
    match git.run(&args) {
        Ok(top) => PathBuf::from(top.trim()),
        Err(err) => {
            tracing::debug!(error = %err, "not inside a work tree");
            PathBuf::from(".")
        }
    }
}
