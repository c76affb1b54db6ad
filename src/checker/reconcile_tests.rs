use super::*;
use crate::github::mock::{MockRepository, status};

const CONTEXT: &str = "commit-guard";

#[test]
fn describe_without_violations_is_success() {
    let (state, description) = describe(&[]);
    assert_eq!(state, StatusState::Success);
    assert_eq!(description, SUCCESS_DESCRIPTION);
}

#[test]
fn describe_lists_violations_in_order() {
    let (state, description) = describe(&["no-wip", "small"]);
    assert_eq!(state, StatusState::Failure);
    assert_eq!(description, "The commit violates rules: no-wip, small.");
}

#[test]
fn force_posts_failure_without_reading_statuses() {
    let api = MockRepository::new().with_status_pages("abc", vec![vec![status(CONTEXT)]]);
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &["no-wip"], true);

    assert_eq!(decision, Decision::Posted(StatusState::Failure));
    assert_eq!(api.status_reads.get(), 0);
    let posted = api.posted.borrow();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "abc");
    assert_eq!(posted[0].1.context, CONTEXT);
    assert!(posted[0].1.description.contains("no-wip"));
}

#[test]
fn clean_commit_posts_success() {
    let api = MockRepository::new();
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &[], false);

    assert_eq!(decision, Decision::Posted(StatusState::Success));
    assert_eq!(api.posted.borrow()[0].1.description, SUCCESS_DESCRIPTION);
}

#[test]
fn existing_context_is_skipped() {
    let api = MockRepository::new()
        .with_status_pages("abc", vec![vec![status("ci/build"), status(CONTEXT)]]);
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &["no-wip"], false);

    assert_eq!(decision, Decision::Skipped(SkipReason::AlreadyReported));
    assert!(decision.is_skipped());
    assert!(api.posted.borrow().is_empty());
}

#[test]
fn context_on_later_page_is_found() {
    let api = MockRepository::new().with_status_pages(
        "abc",
        vec![vec![status("ci/build")], vec![status("ci/lint"), status(CONTEXT)]],
    );
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &[], false);

    assert!(decision.is_skipped());
    assert_eq!(api.status_reads.get(), 2);
}

#[test]
fn other_contexts_only_leads_to_post() {
    let api = MockRepository::new()
        .with_status_pages("abc", vec![vec![status("ci/build")], vec![status("ci/lint")]]);
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &[], false);

    assert_eq!(decision, Decision::Posted(StatusState::Success));
    // two pages plus the empty one that ends the scan
    assert_eq!(api.status_reads.get(), 3);
}

#[test]
fn identical_page_ends_status_scan() {
    let api = MockRepository::new()
        .with_status_pages("abc", vec![vec![status("ci/build")]])
        .repeating_tail("abc");
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &[], false);

    assert_eq!(decision, Decision::Posted(StatusState::Success));
    assert_eq!(api.status_reads.get(), 2);
}

#[test]
fn dry_run_reads_but_does_not_post() {
    let api = MockRepository::new();
    let reconciler = StatusReconciler::new(&api, CONTEXT).with_dry_run(true);

    let decision = reconciler.reconcile("abc", &["no-wip"], false);

    assert_eq!(decision, Decision::DryRun(StatusState::Failure));
    assert_eq!(api.status_reads.get(), 1);
    assert!(api.posted.borrow().is_empty());
}

#[test]
fn dry_run_still_honours_existing_status() {
    let api = MockRepository::new().with_status_pages("abc", vec![vec![status(CONTEXT)]]);
    let reconciler = StatusReconciler::new(&api, CONTEXT).with_dry_run(true);

    assert!(reconciler.reconcile("abc", &[], false).is_skipped());
}

#[test]
fn failed_status_read_reports_without_posting() {
    let api = MockRepository::new().failing_statuses();
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &[], false);

    match decision {
        Decision::ReportFailed { state, message } => {
            assert_eq!(state, None);
            assert!(message.contains("abc"));
        }
        other => panic!("unexpected decision: {other:?}"),
    }
    assert!(api.posted.borrow().is_empty());
}

#[test]
fn failed_post_keeps_intended_state() {
    let api = MockRepository::new().failing_posts();
    let reconciler = StatusReconciler::new(&api, CONTEXT);

    let decision = reconciler.reconcile("abc", &["small"], true);

    assert!(matches!(
        decision,
        Decision::ReportFailed {
            state: Some(StatusState::Failure),
            ..
        }
    ));
}

#[test]
fn target_url_is_attached() {
    let api = MockRepository::new();
    let reconciler = StatusReconciler::new(&api, CONTEXT)
        .with_target_url(Some("https://ci.example.com/run/1".to_string()));

    reconciler.reconcile("abc", &[], true);

    assert_eq!(
        api.posted.borrow()[0].1.target_url.as_deref(),
        Some("https://ci.example.com/run/1")
    );
}

#[test]
fn empty_target_url_is_dropped() {
    let api = MockRepository::new();
    let reconciler = StatusReconciler::new(&api, CONTEXT).with_target_url(Some(String::new()));

    reconciler.reconcile("abc", &[], true);

    assert_eq!(api.posted.borrow()[0].1.target_url, None);
}
