//! Diagnostic logging on stderr through the `log` facade.

use log::LevelFilter;
use simplelog::{ConfigBuilder, TermLogger, TerminalMode};

use crate::output::ColorMode;

/// Log level for a `-v` count: warnings by default, then info, then debug.
#[must_use]
pub const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

const fn term_color(mode: ColorMode) -> simplelog::ColorChoice {
    match mode {
        ColorMode::Auto => simplelog::ColorChoice::Auto,
        ColorMode::Always => simplelog::ColorChoice::Always,
        ColorMode::Never => simplelog::ColorChoice::Never,
    }
}

/// Install the terminal logger.
///
/// # Errors
/// Fails if a logger is already installed.
pub fn init(verbose: u8, color: ColorMode) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(level_for(verbose), config, TerminalMode::Stderr, term_color(color))
}
