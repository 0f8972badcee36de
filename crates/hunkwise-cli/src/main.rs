// Rust guideline compliant 2026-10-14

//! Hunkwise CLI Application
//!
//! Command-line front end for the Hunkwise git helpers.

use clap::Parser;
use hunkwise_cli::commands::{self, hook::HookAction};
use hunkwise_cli::{build_command, init_tracing, DiffArgs};

#[derive(Parser, Debug)]
#[command(
    name = "hunkwise",
    version,
    about = "Hunkwise: diffs and hooks for commit-message tooling",
    long_about = "Hunkwise selects the change-set to describe (staged changes, the last commit, or the span between two tags), prints a lock-file-free diff of it, commits with a given message, and manages a prepare-commit-msg hook.",
    after_help = "Examples:\n  hunkwise diff\n  hunkwise diff --amend --unified 8\n  hunkwise tag --tag-prefix v --json\n  hunkwise commit --message \"fix: handle empty input\"\n  hunkwise hook install\n"
)]
struct Cli {
    #[command(flatten)]
    diff: DiffArgs,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print the diff of the selected change-set
    Diff,

    /// Commit with a message, signed off and skipping hooks
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: Option<String>,

        /// Read the message from a file ('-' for stdin)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Print the git directory
    GitDir,

    /// Show the tag pair a tag-range diff would use
    Tag {
        /// Enable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Manage the prepare-commit-msg hook
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let Some(subcommand) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let command = build_command(&cli.diff)?;
    match subcommand {
        Commands::Diff => {
            print!("{}", commands::diff::execute(&command)?);
        }
        Commands::Commit { message, file } => {
            print!("{}", commands::commit::execute(&command, message, file)?);
        }
        Commands::GitDir => {
            println!("{}", commands::git_dir::execute(&command)?);
        }
        Commands::Tag { json } => {
            println!("{}", commands::tag::execute(&command, json)?);
        }
        Commands::Hook { action } => {
            println!("{}", commands::hook::execute(&command, action)?);
        }
    }

    Ok(())
}
