//! Centralized status and warning messages for CLI output.

use crate::terminal::{print_error, print_warning};

/// Print a warning to stderr (yellow).
pub fn warn(msg: &str) {
    print_warning(msg);
}

/// Print an error to stderr (red).
pub fn error(msg: &str) {
    print_error(msg);
}

pub fn password_saved(path: &str) -> String {
    format!("Password saved to {path}")
}

pub fn clipboard_copied() -> &'static str {
    "Password copied to clipboard!"
}

/// Follow-up line printed after any clipboard failure.
pub fn clipboard_fallback() -> &'static str {
    "Continuing without clipboard functionality."
}
