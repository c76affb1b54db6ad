//! Colored error and warning lines on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use crate::error::CommitGuardError;

use super::ColorMode;
use super::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print an error with its type, detail and suggestion.
    pub fn print_error(&self, error: &CommitGuardError) {
        let detail = error.detail();
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.message(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // stderr may already be gone; nothing useful to do with a write error here
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_detail(w, detail);

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_detail(w, detail);
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>) {
        let Some(d) = detail else {
            return;
        };
        if self.use_colors {
            let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {d}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
