use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::RepoSlug;
use crate::error::{CommitGuardError, Result};

use super::{
    CommitDetail, CommitPage, CommitQuery, CommitSummary, HttpClient, HttpResponse, NewStatus,
    RepositoryApi, ReqwestClient, StatusEntry,
};

/// Page size for every paginated endpoint.
pub const PER_PAGE: u32 = 100;

#[derive(Deserialize)]
struct CombinedStatus {
    #[serde(default)]
    statuses: Vec<StatusEntry>,
}

/// [`RepositoryApi`] over the GitHub REST API for one repository.
#[derive(Debug)]
pub struct GitHubApi<H: HttpClient = ReqwestClient> {
    http: H,
    api_url: String,
    slug: RepoSlug,
}

impl<H: HttpClient> GitHubApi<H> {
    #[must_use]
    pub fn new(http: H, api_url: impl Into<String>, slug: RepoSlug) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            slug,
        }
    }

    #[must_use]
    pub const fn slug(&self) -> &RepoSlug {
        &self.slug
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{tail}",
            self.api_url, self.slug.owner, self.slug.repo
        )
    }

    fn with_params(url: &str, params: &[(&str, String)]) -> Result<String> {
        Url::parse_with_params(url, params)
            .map(String::from)
            .map_err(|e| CommitGuardError::Config(format!("invalid API URL {url}: {e}")))
    }

    fn parse<T: DeserializeOwned>(response: &HttpResponse, what: &str) -> std::result::Result<T, String> {
        serde_json::from_str(&response.body).map_err(|e| format!("malformed {what} response: {e}"))
    }
}

fn page_params(page: u32) -> Vec<(&'static str, String)> {
    vec![("per_page", PER_PAGE.to_string()), ("page", page.to_string())]
}

fn to_report(err: CommitGuardError) -> CommitGuardError {
    match err {
        CommitGuardError::Fetch(msg) => CommitGuardError::Report(msg),
        other => other,
    }
}

impl<H: HttpClient> RepositoryApi for GitHubApi<H> {
    fn list_commits(&self, query: &CommitQuery, page: u32) -> Result<CommitPage> {
        let mut params = Vec::new();
        let filters = [
            ("author", &query.author),
            ("path", &query.path),
            ("sha", &query.git_ref),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }
        params.extend(page_params(page));

        let url = Self::with_params(&self.repo_url("commits"), &params)?;
        let response = self.http.get(&url)?;
        if !response.is_success() {
            return Err(CommitGuardError::Fetch(format!(
                "Failed to retrieve commits from repository {}: HTTP {}",
                self.slug, response.status
            )));
        }
        let commits: Vec<CommitSummary> =
            Self::parse(&response, "commits").map_err(CommitGuardError::Fetch)?;
        Ok(CommitPage {
            commits,
            body_len: response.body.len(),
        })
    }

    fn get_commit(&self, sha: &str) -> Result<CommitDetail> {
        let response = self.http.get(&self.repo_url(&format!("commits/{sha}")))?;
        if !response.is_success() {
            return Err(CommitGuardError::Fetch(format!(
                "Failed to retrieve commit {sha}: HTTP {}",
                response.status
            )));
        }
        Self::parse(&response, "commit").map_err(CommitGuardError::Fetch)
    }

    fn list_statuses(&self, sha: &str, page: u32) -> Result<Vec<StatusEntry>> {
        let url = Self::with_params(
            &self.repo_url(&format!("commits/{sha}/status")),
            &page_params(page),
        )?;
        let response = self.http.get(&url).map_err(to_report)?;
        if !response.is_success() {
            return Err(CommitGuardError::Report(format!(
                "Failed to read statuses of {sha}: HTTP {}",
                response.status
            )));
        }
        let combined: CombinedStatus =
            Self::parse(&response, "status").map_err(CommitGuardError::Report)?;
        Ok(combined.statuses)
    }

    fn post_status(&self, sha: &str, status: &NewStatus) -> Result<()> {
        let body = serde_json::to_string(status)?;
        let response = self
            .http
            .post_json(&self.repo_url(&format!("statuses/{sha}")), &body)
            .map_err(to_report)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(CommitGuardError::Report(format!(
                "Failed to set status of {sha}: HTTP {}",
                response.status
            )))
        }
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
