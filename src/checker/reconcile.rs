use crate::error::Result;
use crate::github::{NewStatus, RepositoryApi, StatusEntry, StatusState};

pub const SUCCESS_DESCRIPTION: &str = "No rules are violated by this commit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A status with this run's context already exists on the commit.
    AlreadyReported,
}

/// What happened to a commit's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Posted(StatusState),
    /// Would have posted, but dry-run is on.
    DryRun(StatusState),
    Skipped(SkipReason),
    /// Reading or writing statuses failed; the session carries on.
    ReportFailed {
        state: Option<StatusState>,
        message: String,
    },
}

impl Decision {
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Status state and description for a set of violated rule names.
#[must_use]
pub fn describe(violated: &[&str]) -> (StatusState, String) {
    if violated.is_empty() {
        (StatusState::Success, SUCCESS_DESCRIPTION.to_string())
    } else {
        (
            StatusState::Failure,
            format!("The commit violates rules: {}.", violated.join(", ")),
        )
    }
}

/// Decides whether a commit needs a new status and posts it.
pub struct StatusReconciler<'a, R: RepositoryApi + ?Sized> {
    api: &'a R,
    context: String,
    target_url: Option<String>,
    dry_run: bool,
}

impl<'a, R: RepositoryApi + ?Sized> StatusReconciler<'a, R> {
    #[must_use]
    pub fn new(api: &'a R, context: impl Into<String>) -> Self {
        Self {
            api,
            context: context.into(),
            target_url: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_target_url(mut self, target_url: Option<String>) -> Self {
        self.target_url = target_url.filter(|url| !url.is_empty());
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Post the status for `sha`, unless one with our context already exists
    /// and `force` is off.
    pub fn reconcile(&self, sha: &str, violated: &[&str], force: bool) -> Decision {
        if !force {
            match self.already_reported(sha) {
                Ok(Some(existing)) => {
                    log::debug!(
                        "{sha}: status with context '{}' exists ({})",
                        existing.context,
                        existing.state
                    );
                    return Decision::Skipped(SkipReason::AlreadyReported);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("{sha}: {e}");
                    return Decision::ReportFailed {
                        state: None,
                        message: e.message(),
                    };
                }
            }
        }

        let (state, description) = describe(violated);
        if self.dry_run {
            return Decision::DryRun(state);
        }

        let status = NewStatus {
            state,
            description,
            context: self.context.clone(),
            target_url: self.target_url.clone(),
        };
        match self.api.post_status(sha, &status) {
            Ok(()) => {
                log::debug!("{sha}: posted {}", state.as_str());
                Decision::Posted(state)
            }
            Err(e) => {
                log::warn!("{sha}: {e}");
                Decision::ReportFailed {
                    state: Some(state),
                    message: e.message(),
                }
            }
        }
    }

    /// Page through existing statuses looking for our context.
    ///
    /// Stops at an empty page or at a page identical to the previous one.
    fn already_reported(&self, sha: &str) -> Result<Option<StatusEntry>> {
        let mut previous: Option<Vec<StatusEntry>> = None;
        let mut page = 1;
        loop {
            let statuses = self.api.list_statuses(sha, page)?;
            if statuses.is_empty() || previous.as_ref() == Some(&statuses) {
                return Ok(None);
            }
            if let Some(existing) = statuses.iter().find(|s| s.context == self.context) {
                return Ok(Some(existing.clone()));
            }
            previous = Some(statuses);
            page += 1;
        }
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
