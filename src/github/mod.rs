//! GitHub REST API access: wire types, the [`RepositoryApi`] seam used by the
//! session, and its HTTP-backed implementation.

mod api;
mod http;

#[cfg(test)]
pub mod mock;

pub use api::{GitHubApi, PER_PAGE};
pub use http::{HttpClient, HttpResponse, ReqwestClient};

use serde::{Deserialize, Serialize};

use crate::commit::{CommitRecord, CommitStats, FileEntry};
use crate::error::Result;

/// Commit identity as listed by the commits endpoint or a push payload.
///
/// Accepts both shapes: `{ "sha", "commit": { "message" } }` from the API and
/// `{ "id", "message" }` from push webhooks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCommit")]
pub struct CommitSummary {
    pub sha: String,
    pub message: String,
}

#[derive(Deserialize)]
struct RawCommit {
    #[serde(default)]
    sha: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    commit: Option<CommitMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct CommitMessage {
    #[serde(default)]
    message: String,
}

impl TryFrom<RawCommit> for CommitSummary {
    type Error = String;

    fn try_from(raw: RawCommit) -> std::result::Result<Self, Self::Error> {
        let sha = raw
            .sha
            .or(raw.id)
            .ok_or_else(|| "commit has neither 'sha' nor 'id'".to_string())?;
        let message = raw
            .message
            .or_else(|| raw.commit.map(|c| c.message))
            .unwrap_or_default();
        Ok(Self { sha, message })
    }
}

/// One page of the commits listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPage {
    pub commits: Vec<CommitSummary>,
    /// Size of the raw response body in bytes.
    pub body_len: usize,
}

/// Diff payload of a single commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub stats: CommitStats,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl CommitDetail {
    /// Combine with the summary into the record rules are evaluated against.
    #[must_use]
    pub fn into_record(self, summary: &CommitSummary) -> CommitRecord {
        CommitRecord::new(summary.sha.clone(), summary.message.clone())
            .with_files(self.files)
            .with_stats(self.stats)
    }
}

/// Filters for the commits listing; `None` leaves a filter off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitQuery {
    pub author: Option<String>,
    pub path: Option<String>,
    pub git_ref: Option<String>,
}

/// An existing status entry on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEntry {
    pub context: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Success,
    Failure,
}

impl StatusState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// Body of a status to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStatus {
    pub state: StatusState,
    pub description: String,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

/// Push webhook payload; only the `commits` array is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub commits: Vec<CommitSummary>,
}

/// Remote repository operations the session depends on.
pub trait RepositoryApi {
    /// List one page of commits.
    ///
    /// # Errors
    /// Returns `Fetch` on transport failure or a non-success response.
    fn list_commits(&self, query: &CommitQuery, page: u32) -> Result<CommitPage>;

    /// Fetch the diff and stats of one commit.
    ///
    /// # Errors
    /// Returns `Fetch` on transport failure, a non-success response or a malformed body.
    fn get_commit(&self, sha: &str) -> Result<CommitDetail>;

    /// List one page of statuses already attached to a commit.
    ///
    /// # Errors
    /// Returns `Report` on transport failure or a non-success response.
    fn list_statuses(&self, sha: &str, page: u32) -> Result<Vec<StatusEntry>>;

    /// Create a status on a commit.
    ///
    /// # Errors
    /// Returns `Report` on transport failure or a non-success response.
    fn post_status(&self, sha: &str, status: &NewStatus) -> Result<()>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
