//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output shown only with `--verbose`
//!
//! Messages go to stderr so that `quill export` can own stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "loaded {} social links", count);
//! debug!("config"; "resolved branch from ${}", var);
//! ```

use owo_colors::{AnsiColors, OwoColorize};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write `[module] message` to stderr.
pub fn log(module: &str, message: &str) {
    let mut stderr = stderr().lock();
    // Nothing sensible to do if stderr is gone.
    let _ = writeln!(stderr, "{} {message}", colorize_prefix(module));
}

fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let color = match module.to_ascii_lowercase().as_str() {
        "check" | "init" | "export" => AnsiColors::BrightGreen,
        "config" => AnsiColors::BrightBlue,
        "error" => AnsiColors::BrightRed,
        "warning" => AnsiColors::BrightMagenta,
        _ => AnsiColors::BrightYellow,
    };
    prefix.color(color).bold().to_string()
}
