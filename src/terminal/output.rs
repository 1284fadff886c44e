//! Terminal output utilities.
//!
//! Box drawing, TTY detection, styled messages.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

// ============================================================================
// Terminal Control
// ============================================================================

pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print warning message in yellow to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("{}", msg.yellow());
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Widest content that fits between the box borders.
pub const BOX_INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Write box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Write box content line: │ content                                        │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let display_len = console_width(content);

    if display_len <= BOX_INNER_WIDTH {
        let padding = BOX_INNER_WIDTH - display_len;
        writeln!(out, "│ {}{} │", content, " ".repeat(padding))
    } else {
        writeln!(out, "│ {} │", content)
    }
}

/// Write box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
