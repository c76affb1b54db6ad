use super::*;

#[test]
fn summary_accepts_api_shape() {
    let summary: CommitSummary =
        serde_json::from_str(r#"{"sha": "abc", "commit": {"message": "Hello"}}"#).unwrap();
    assert_eq!(summary.sha, "abc");
    assert_eq!(summary.message, "Hello");
}

#[test]
fn summary_accepts_push_shape() {
    let summary: CommitSummary =
        serde_json::from_str(r#"{"id": "def", "message": "From push"}"#).unwrap();
    assert_eq!(summary.sha, "def");
    assert_eq!(summary.message, "From push");
}

#[test]
fn summary_prefers_sha_over_id() {
    let summary: CommitSummary =
        serde_json::from_str(r#"{"sha": "s", "id": "i", "message": "m"}"#).unwrap();
    assert_eq!(summary.sha, "s");
}

#[test]
fn summary_without_identifier_is_rejected() {
    let result: std::result::Result<CommitSummary, _> =
        serde_json::from_str(r#"{"message": "orphan"}"#);
    assert!(result.is_err());
}

#[test]
fn push_payload_reads_commits_array() {
    let payload: PushPayload = serde_json::from_str(
        r#"{"ref": "refs/heads/main", "commits": [
            {"id": "one", "message": "First"},
            {"id": "two", "message": "Second"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(payload.commits.len(), 2);
    assert_eq!(payload.commits[0].sha, "one");
}

#[test]
fn push_payload_without_commits_is_empty() {
    let payload: PushPayload = serde_json::from_str(r#"{"zen": "ping"}"#).unwrap();
    assert!(payload.commits.is_empty());
}

#[test]
fn detail_into_record_keeps_summary_identity() {
    let detail: CommitDetail = serde_json::from_str(
        r#"{"stats": {"total": 3, "additions": 2, "deletions": 1},
            "files": [{"filename": "a.rs", "status": "modified", "changes": 3}]}"#,
    )
    .unwrap();
    let summary = CommitSummary {
        sha: "abc".to_string(),
        message: "msg".to_string(),
    };

    let record = detail.into_record(&summary);

    assert_eq!(record.sha, "abc");
    assert_eq!(record.message, "msg");
    assert_eq!(record.stats.total, 3);
    assert_eq!(record.files[0].filename, "a.rs");
}

#[test]
fn unknown_file_status_maps_to_other() {
    let entry: FileEntry =
        serde_json::from_str(r#"{"filename": "x", "status": "copied"}"#).unwrap();
    assert_eq!(entry.status, crate::commit::FileStatus::Other);
}

#[test]
fn status_state_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&StatusState::Success).unwrap(),
        "\"success\""
    );
    assert_eq!(StatusState::Failure.as_str(), "failure");
}
