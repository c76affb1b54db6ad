use crate::commit::{CommitStats, FileEntry};

/// Commit-level counter a stats rule can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStat {
    Total,
    Additions,
    Deletions,
}

impl CommitStat {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "total" => Some(Self::Total),
            "additions" => Some(Self::Additions),
            "deletions" => Some(Self::Deletions),
            _ => None,
        }
    }

    #[must_use]
    pub const fn read(self, stats: &CommitStats) -> u64 {
        match self {
            Self::Total => stats.total,
            Self::Additions => stats.additions,
            Self::Deletions => stats.deletions,
        }
    }
}

/// Per-file counter a stats rule can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStat {
    Changes,
    Additions,
    Deletions,
}

impl FileStat {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "changes" => Some(Self::Changes),
            "additions" => Some(Self::Additions),
            "deletions" => Some(Self::Deletions),
            _ => None,
        }
    }

    #[must_use]
    pub const fn read(self, file: &FileEntry) -> u64 {
        match self {
            Self::Changes => file.changes,
            Self::Additions => file.additions,
            Self::Deletions => file.deletions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatScope {
    Commit(CommitStat),
    File(FileStat),
}

/// Inclusive range a counter must stay within. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: Option<u64>,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn violated_by(&self, value: u64) -> bool {
        if value < self.min {
            return true;
        }
        match self.max {
            Some(max) => value > max,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRule {
    pub scope: StatScope,
    pub bounds: Bounds,
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
