//! Shared terminal utilities.
//!
//! Box drawing, TTY detection, and styled message helpers.

mod output;

pub use output::*;
