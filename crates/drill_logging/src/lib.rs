#![deny(missing_docs)]
//! Shared logging utilities for the drill crates.
//!
//! The `drill_*` macros forward to the `log` facade so the component crates
//! never name a concrete logger. Binaries and tests pick the backend.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! drill_trace {
    ($($arg:tt)*) => {{
        ::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! drill_debug {
    ($($arg:tt)*) => {{
        ::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! drill_info {
    ($($arg:tt)*) => {{
        ::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! drill_warn {
    ($($arg:tt)*) => {{
        ::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! drill_error {
    ($($arg:tt)*) => {{
        ::log::error!($($arg)*);
    }};
}

/// Log level used by [`initialize_for_tests`].
///
/// Debug builds get `Debug`, release builds get `Info`.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
