//! Password generation settings.
//!
//! Settings live for one invocation only; nothing is persisted.

use std::path::PathBuf;

use crate::error::Result;
use crate::pass::Policy;

/// Length used in flag mode when `--length` is omitted.
pub const DEFAULT_LENGTH: usize = 12;

/// Shortest password accepted.
pub const MIN_LENGTH: usize = 6;

/// Longest password accepted.
pub const MAX_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub special: bool,
    pub digits: bool,
    pub output_file_path: Option<PathBuf>,
    pub to_clipboard: bool,
}

impl Settings {
    /// Validate the generation half of the settings.
    pub fn policy(&self) -> Result<Policy> {
        Policy::new(self.pass_length, self.special, self.digits)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            special: false,
            digits: false,
            output_file_path: None,
            to_clipboard: false,
        }
    }
}
