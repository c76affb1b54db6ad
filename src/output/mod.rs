mod error_output;
mod text;

pub use error_output::ErrorOutput;
pub use text::TextReporter;

use crate::checker::{Decision, Evaluation};
use crate::commit::CommitRecord;
use crate::error::CommitGuardError;
use crate::github::CommitSummary;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color, see https://no-color.org
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// How much of each checked commit is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLevel {
    /// Print nothing.
    None,
    /// One block per commit with the status update and verdict.
    #[default]
    Commits,
    /// Like `Commits`, plus every rule's verdict.
    Rules,
}

impl std::str::FromStr for OutputLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "commits" => Ok(Self::Commits),
            "rules" => Ok(Self::Rules),
            _ => Err(format!("Unknown output level: {s}")),
        }
    }
}

/// Receives the result of every commit a session processes.
pub trait ReportSink {
    fn commit_checked(
        &mut self,
        commit: &CommitRecord,
        evaluation: &Evaluation<'_>,
        decision: &Decision,
    );

    /// The commit could not be checked at all, e.g. its diff failed to load.
    fn commit_failed(&mut self, commit: &CommitSummary, error: &CommitGuardError);
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
