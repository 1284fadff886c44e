//! Prompt and message text for interactive mode.

use std::io::{self, Write};

pub const HEADER: &str = "=== Strong Password Generator ===";

pub const LENGTH_PROMPT: &str = "Password length (min 6): ";
pub const SPECIAL_PROMPT: &str = "Include special characters? (y/n): ";
pub const DIGITS_PROMPT: &str = "Include digits? (y/n): ";
pub const FILE_PROMPT: &str = "Save to file? Enter filename or press Enter to skip: ";
pub const CLIPBOARD_PROMPT: &str = "Copy to clipboard? (y/n): ";

pub const INVALID_INTEGER: &str = "Invalid integer! Try again.";
pub const TOO_SHORT: &str = "Password should be at least 6 characters. Try again.";

pub fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")
}
