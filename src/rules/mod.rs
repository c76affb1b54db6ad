//! Typed commit rules and their matching semantics.
//!
//! Rules are immutable once loaded. [`Rule::evaluate`] is pure and returns a
//! fresh [`RuleOutcome`] per call, so one rule set can be applied to any number
//! of commits in a session.

mod matcher;
mod stats;

pub use matcher::{MatchType, Matcher};
pub use stats::{Bounds, CommitStat, FileStat, StatScope, StatsRule};

use crate::commit::{CommitRecord, FileStatus};

/// Which changed files a path rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Modified,
    Added,
    Removed,
    Any,
}

impl StatusFilter {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "modified" => Some(Self::Modified),
            "added" => Some(Self::Added),
            "removed" => Some(Self::Removed),
            "any" | "*" => Some(Self::Any),
            _ => None,
        }
    }

    #[must_use]
    pub fn accepts(self, status: FileStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Modified => status == FileStatus::Modified,
            Self::Added => status == FileStatus::Added,
            Self::Removed => status == FileStatus::Removed,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RuleKind {
    Message(Matcher),
    Path {
        matcher: Matcher,
        status: StatusFilter,
    },
    Stats(StatsRule),
}

impl RuleKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Path { .. } => "path",
            Self::Stats(_) => "stats",
        }
    }

    /// Whether violations are reported per file rather than per commit.
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        match self {
            Self::Message(_) => false,
            Self::Path { .. } => true,
            Self::Stats(rule) => matches!(rule.scope, StatScope::File(_)),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(matcher) | Self::Path { matcher, .. } => {
                write!(f, "{} rule, {matcher} match", self.label())
            }
            Self::Stats(_) => write!(f, "{} rule", self.label()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
}

/// Result of evaluating one rule against one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub violated: bool,
    /// Offending file names; only per-file rules fill this in.
    pub files: Vec<String>,
}

impl RuleOutcome {
    #[must_use]
    pub const fn commit_level(violated: bool) -> Self {
        Self {
            violated,
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn per_file(files: Vec<String>) -> Self {
        Self {
            violated: !files.is_empty(),
            files,
        }
    }
}

impl Rule {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    #[must_use]
    pub fn evaluate(&self, commit: &CommitRecord) -> RuleOutcome {
        match &self.kind {
            RuleKind::Message(matcher) => RuleOutcome::commit_level(matcher.matches(&commit.message)),
            RuleKind::Path { matcher, status } => RuleOutcome::per_file(
                commit
                    .files
                    .iter()
                    .filter(|file| status.accepts(file.status))
                    .filter(|file| matcher.matches(&file.filename))
                    .map(|file| file.filename.clone())
                    .collect(),
            ),
            RuleKind::Stats(rule) => match rule.scope {
                StatScope::Commit(stat) => {
                    RuleOutcome::commit_level(rule.bounds.violated_by(stat.read(&commit.stats)))
                }
                StatScope::File(stat) => RuleOutcome::per_file(
                    commit
                        .files
                        .iter()
                        .filter(|file| rule.bounds.violated_by(stat.read(file)))
                        .map(|file| file.filename.clone())
                        .collect(),
                ),
            },
        }
    }
}

/// Rules sorted by name, ready for evaluation.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set; rules are sorted by name so evaluation order is stable.
    #[must_use]
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
