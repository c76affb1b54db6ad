use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::error::{CommitGuardError, Result};

use super::{
    CommitDetail, CommitPage, CommitQuery, CommitSummary, NewStatus, RepositoryApi, StatusEntry,
};

/// In-memory [`RepositoryApi`] that records every call.
#[derive(Default)]
pub struct MockRepository {
    commit_pages: Vec<CommitPage>,
    failing_listing_page: Option<u32>,
    details: HashMap<String, CommitDetail>,
    status_pages: HashMap<String, Vec<Vec<StatusEntry>>>,
    repeating_tail: HashSet<String>,
    failing_statuses: bool,
    failing_posts: bool,
    pub listed_pages: RefCell<Vec<u32>>,
    pub status_reads: Cell<usize>,
    pub posted: RefCell<Vec<(String, NewStatus)>>,
}

pub fn summary(sha: &str, message: &str) -> CommitSummary {
    CommitSummary {
        sha: sha.to_string(),
        message: message.to_string(),
    }
}

pub fn status(context: &str) -> StatusEntry {
    StatusEntry {
        context: context.to_string(),
        state: "success".to_string(),
    }
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next commits page with the raw body size the API would report.
    pub fn with_commit_page(mut self, commits: Vec<CommitSummary>, body_len: usize) -> Self {
        self.commit_pages.push(CommitPage { commits, body_len });
        self
    }

    pub fn failing_listing_at(mut self, page: u32) -> Self {
        self.failing_listing_page = Some(page);
        self
    }

    pub fn with_detail(mut self, sha: &str, detail: CommitDetail) -> Self {
        self.details.insert(sha.to_string(), detail);
        self
    }

    pub fn with_status_pages(mut self, sha: &str, pages: Vec<Vec<StatusEntry>>) -> Self {
        self.status_pages.insert(sha.to_string(), pages);
        self
    }

    /// Past its last page, keep returning the last page instead of an empty one.
    pub fn repeating_tail(mut self, sha: &str) -> Self {
        self.repeating_tail.insert(sha.to_string());
        self
    }

    pub fn failing_statuses(mut self) -> Self {
        self.failing_statuses = true;
        self
    }

    pub fn failing_posts(mut self) -> Self {
        self.failing_posts = true;
        self
    }

    pub fn posted_shas(&self) -> Vec<String> {
        self.posted.borrow().iter().map(|(sha, _)| sha.clone()).collect()
    }
}

fn page_index(page: u32) -> usize {
    usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX)
}

impl RepositoryApi for MockRepository {
    fn list_commits(&self, _query: &CommitQuery, page: u32) -> Result<CommitPage> {
        self.listed_pages.borrow_mut().push(page);
        if self.failing_listing_page == Some(page) {
            return Err(CommitGuardError::Fetch(
                "Failed to retrieve commits from repository octo/repo: HTTP 500".to_string(),
            ));
        }
        // past the last page the API answers "[]"
        Ok(self
            .commit_pages
            .get(page_index(page))
            .cloned()
            .unwrap_or_else(|| CommitPage {
                commits: Vec::new(),
                body_len: 2,
            }))
    }

    fn get_commit(&self, sha: &str) -> Result<CommitDetail> {
        self.details
            .get(sha)
            .cloned()
            .ok_or_else(|| CommitGuardError::Fetch(format!("Failed to retrieve commit {sha}: HTTP 404")))
    }

    fn list_statuses(&self, sha: &str, page: u32) -> Result<Vec<StatusEntry>> {
        self.status_reads.set(self.status_reads.get() + 1);
        if self.failing_statuses {
            return Err(CommitGuardError::Report(format!(
                "Failed to read statuses of {sha}: HTTP 500"
            )));
        }
        let Some(pages) = self.status_pages.get(sha) else {
            return Ok(Vec::new());
        };
        let page = pages.get(page_index(page)).cloned();
        Ok(match page {
            Some(entries) => entries,
            None if self.repeating_tail.contains(sha) => pages.last().cloned().unwrap_or_default(),
            None => Vec::new(),
        })
    }

    fn post_status(&self, sha: &str, status: &NewStatus) -> Result<()> {
        if self.failing_posts {
            return Err(CommitGuardError::Report(format!(
                "Failed to set status of {sha}: HTTP 500"
            )));
        }
        self.posted
            .borrow_mut()
            .push((sha.to_string(), status.clone()));
        Ok(())
    }
}
