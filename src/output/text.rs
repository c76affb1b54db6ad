use std::io::{IsTerminal, Stdout, Write};

use crate::checker::{Decision, Evaluation, RuleResult, SUCCESS_DESCRIPTION};
use crate::commit::CommitRecord;
use crate::error::CommitGuardError;
use crate::github::CommitSummary;

use super::{ColorMode, OutputLevel, ReportSink, ansi};

/// Human-readable console report, one block per commit.
///
/// ```text
/// - 1a2b3c: Fix typo
///   -> no-wip: PASS
///   ~> Updating commit status: OK
///   => SUCCESS - No rules are violated by this commit.
/// ```
pub struct TextReporter<W: Write> {
    out: W,
    level: OutputLevel,
    use_colors: bool,
}

impl TextReporter<Stdout> {
    #[must_use]
    pub fn stdout(level: OutputLevel, mode: ColorMode) -> Self {
        let out = std::io::stdout();
        let use_colors = mode.use_colors(out.is_terminal());
        Self::new(out, level, use_colors)
    }
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(out: W, level: OutputLevel, use_colors: bool) -> Self {
        Self {
            out,
            level,
            use_colors,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn arrow(&self) -> String {
        self.paint("=> ", ansi::BOLD)
    }

    fn write_rule(&mut self, result: &RuleResult<'_>) {
        let rule = result.rule;
        if !result.outcome.violated {
            let pass = self.paint("PASS", ansi::GREEN);
            writeln!(self.out, "  -> {}: {pass}", rule.name).ok();
            return;
        }

        let fail = self.paint("FAIL", ansi::RED);
        writeln!(self.out, "  -> {}: {fail}", rule.name).ok();
        if rule.kind.is_per_file() {
            for file in &result.outcome.files {
                writeln!(self.out, "     - {file}: {}", rule.description).ok();
            }
        } else {
            writeln!(self.out, "     - {}", rule.description).ok();
        }
    }

    fn write_status_update(&mut self, decision: &Decision) {
        let label = match decision {
            Decision::Posted(_) => self.paint("OK", ansi::GREEN),
            Decision::DryRun(_) => self.paint("DRY-RUN", ansi::YELLOW),
            Decision::ReportFailed { .. } => self.paint("ERROR", ansi::MAGENTA),
            Decision::Skipped(_) => return,
        };
        writeln!(self.out, "  ~> Updating commit status: {label}").ok();
    }

    fn write_verdict(&mut self, evaluation: &Evaluation<'_>) {
        let arrow = self.arrow();
        let violated = evaluation.violated_rules();
        if violated.is_empty() {
            let success = self.paint("SUCCESS", ansi::GREEN);
            writeln!(self.out, "  {arrow}{success} - {SUCCESS_DESCRIPTION}").ok();
        } else {
            let failure = self.paint("FAILURE", ansi::RED);
            writeln!(
                self.out,
                "  {arrow}{failure} - The commit violates rules: {}.",
                violated.join(", ")
            )
            .ok();
        }
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn commit_checked(
        &mut self,
        commit: &CommitRecord,
        evaluation: &Evaluation<'_>,
        decision: &Decision,
    ) {
        if self.level == OutputLevel::None {
            return;
        }

        writeln!(self.out, "- {}: {}", commit.sha, commit.message).ok();
        if self.level == OutputLevel::Rules {
            for result in &evaluation.results {
                self.write_rule(result);
            }
        }

        if decision.is_skipped() {
            let arrow = self.arrow();
            let skipped = self.paint("SKIPPED", ansi::YELLOW);
            writeln!(
                self.out,
                "  {arrow}{skipped} - This commit already has status with the same context."
            )
            .ok();
            return;
        }

        self.write_status_update(decision);
        self.write_verdict(evaluation);
    }

    fn commit_failed(&mut self, commit: &CommitSummary, error: &CommitGuardError) {
        if self.level == OutputLevel::None {
            return;
        }
        let arrow = self.arrow();
        let label = self.paint("ERROR", ansi::MAGENTA);
        writeln!(self.out, "- {}: {}", commit.sha, commit.message).ok();
        writeln!(self.out, "  {arrow}{label} - {}", error.message()).ok();
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
