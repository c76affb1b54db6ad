//! Drives one run: fetch commits, evaluate them, reconcile statuses, report.

use crate::checker::{Decision, StatusReconciler, evaluate_commit};
use crate::error::Result;
use crate::github::{CommitQuery, CommitSummary, PushPayload, RepositoryApi};
use crate::output::ReportSink;
use crate::rules::RuleSet;

/// Response bodies shorter than this carry no further commits.
const MIN_PAGE_BODY_LEN: usize = 20;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub checked: usize,
    pub violating: usize,
    pub skipped: usize,
    /// Commits whose detail fetch or status update failed.
    pub errors: usize,
}

pub struct Session<'a, R: RepositoryApi + ?Sized, S: ReportSink> {
    api: &'a R,
    rules: &'a RuleSet,
    reconciler: StatusReconciler<'a, R>,
    force: bool,
    sink: S,
    summary: SessionSummary,
}

impl<'a, R: RepositoryApi + ?Sized, S: ReportSink> Session<'a, R, S> {
    #[must_use]
    pub fn new(api: &'a R, rules: &'a RuleSet, reconciler: StatusReconciler<'a, R>, sink: S) -> Self {
        Self {
            api,
            rules,
            reconciler,
            force: false,
            sink,
            summary: SessionSummary::default(),
        }
    }

    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Check every commit matching `query`, page by page.
    ///
    /// # Errors
    /// Returns `Fetch` as soon as a commits page cannot be listed; commits
    /// already handled stay reported.
    pub fn run_pull(&mut self, query: &CommitQuery) -> Result<SessionSummary> {
        let mut page = 1;
        loop {
            let listing = self.api.list_commits(query, page)?;
            log::debug!(
                "commits page {page}: {} commits, {} bytes",
                listing.commits.len(),
                listing.body_len
            );
            for commit in &listing.commits {
                self.check_commit(commit);
            }
            if listing.commits.is_empty() || listing.body_len < MIN_PAGE_BODY_LEN {
                break;
            }
            page += 1;
        }
        Ok(self.summary)
    }

    /// Check the first commit of a push payload; later commits are ignored.
    pub fn run_push(&mut self, payload: &PushPayload) -> SessionSummary {
        if let Some(commit) = payload.commits.first() {
            self.check_commit(commit);
        }
        self.summary
    }

    fn check_commit(&mut self, summary: &CommitSummary) {
        let detail = match self.api.get_commit(&summary.sha) {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("{}: {e}", summary.sha);
                self.summary.errors += 1;
                self.sink.commit_failed(summary, &e);
                return;
            }
        };

        let record = detail.into_record(summary);
        let evaluation = evaluate_commit(&record, self.rules);
        let violated = evaluation.violated_rules();
        let decision = self.reconciler.reconcile(&record.sha, &violated, self.force);
        log::debug!("{}: {decision:?}", record.sha);

        self.summary.checked += 1;
        if !evaluation.is_clean() {
            self.summary.violating += 1;
        }
        match decision {
            Decision::Skipped(_) => self.summary.skipped += 1,
            Decision::ReportFailed { .. } => self.summary.errors += 1,
            Decision::Posted(_) | Decision::DryRun(_) => {}
        }
        self.sink.commit_checked(&record, &evaluation, &decision);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
