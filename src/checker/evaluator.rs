use crate::commit::CommitRecord;
use crate::rules::{Rule, RuleOutcome, RuleSet};

/// Outcome of one rule, kept alongside the rule for presentation.
#[derive(Debug, Clone)]
pub struct RuleResult<'a> {
    pub rule: &'a Rule,
    pub outcome: RuleOutcome,
}

/// Per-rule results for one commit, in rule set order.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub results: Vec<RuleResult<'a>>,
}

impl Evaluation<'_> {
    /// Names of violated rules, each listed once.
    #[must_use]
    pub fn violated_rules(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.outcome.violated)
            .map(|r| r.rule.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| !r.outcome.violated)
    }
}

/// Run every rule of the set against one commit.
#[must_use]
pub fn evaluate_commit<'a>(commit: &CommitRecord, rules: &'a RuleSet) -> Evaluation<'a> {
    let results = rules
        .iter()
        .map(|rule| RuleResult {
            rule,
            outcome: rule.evaluate(commit),
        })
        .collect();
    Evaluation { results }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
