//! Per-commit evaluation and commit status reconciliation.

mod evaluator;
mod reconcile;

pub use evaluator::{Evaluation, RuleResult, evaluate_commit};
pub use reconcile::{Decision, SUCCESS_DESCRIPTION, SkipReason, StatusReconciler, describe};
