use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::github::CommitQuery;
use crate::output::{ColorMode, OutputLevel};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author, version, about = "Check GitHub commits against configurable rules")]
#[command(long_about = "Evaluates commits of a GitHub repository against message, path and \
    diff-size rules and publishes the verdict as a commit status.\n\n\
    Exit codes:\n  \
    0 - Run completed\n  \
    1 - Commits could not be retrieved\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the commits of a repository and set their statuses
    Check(CheckArgs),

    /// Check the commit of a push webhook payload
    Push(PushArgs),

    /// Load the configuration and rules without touching the network
    Validate(ValidateArgs),
}

/// Options shared by the commands that post statuses.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Post a status even if one with the same context exists
    #[arg(short, long)]
    pub force: bool,

    /// Evaluate and report, but do not post statuses
    #[arg(short, long)]
    pub dry_run: bool,

    /// Repository as owner/repo
    pub reposlug: String,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Only commits by this GitHub login or email
    #[arg(short, long)]
    pub author: Option<String>,

    /// Only commits touching this file path
    #[arg(short, long)]
    pub path: Option<String>,

    /// Branch name or SHA to start listing commits from
    #[arg(short = 'r', long = "ref")]
    pub git_ref: Option<String>,

    /// Console output [possible values: none, commits, rules]
    #[arg(short, long, default_value = "commits")]
    pub output: OutputLevel,
}

impl CheckArgs {
    #[must_use]
    pub fn query(&self) -> CommitQuery {
        CommitQuery {
            author: self.author.clone(),
            path: self.path.clone(),
            git_ref: self.git_ref.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct PushArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Push event JSON; read from stdin when omitted or "-"
    #[arg(long)]
    pub payload: Option<PathBuf>,

    /// URL attached to the posted status
    #[arg(long)]
    pub target_url: Option<String>,

    /// Console output [possible values: none, commits, rules]
    #[arg(short, long, default_value = "none")]
    pub output: OutputLevel,
}

impl PushArgs {
    /// Payload file, or `None` for stdin.
    #[must_use]
    pub fn payload_path(&self) -> Option<&Path> {
        self.payload
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
