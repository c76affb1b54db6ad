pub mod checker;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod output;
pub mod rules;
pub mod session;

pub use error::{CommitGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FETCH_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for an error that ended the run.
#[must_use]
pub const fn exit_code_for(error: &CommitGuardError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FETCH_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
