use serde::Deserialize;

/// Change status of a single file in a commit diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    #[serde(other)]
    Other,
}

impl FileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
            Self::Other => "other",
        }
    }
}

/// One changed file of a commit, with its line counters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub filename: String,
    pub status: FileStatus,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changes: u64,
}

/// Aggregate line counters of a whole commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CommitStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

/// Everything rules look at for one commit: message plus its diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    pub files: Vec<FileEntry>,
    pub stats: CommitStats,
}

impl CommitRecord {
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<FileEntry>) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: CommitStats) -> Self {
        self.stats = stats;
        self
    }
}
