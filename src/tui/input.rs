use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use tracing::trace;

use super::text::{INVALID_INTEGER, TOO_SHORT};
use crate::error::{Error, Result};

/// Print `prompt` and read one trimmed line. EOF is an error.
pub fn get_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Prompt until the answer is an integer of at least `min`.
pub fn get_numeric_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    min: usize,
) -> Result<usize> {
    loop {
        let answer = get_line(input, out, prompt)?;
        match answer.parse::<i64>() {
            Ok(n) if n >= min as i64 => return Ok(n as usize),
            Ok(n) => {
                trace!(n, "length below minimum");
                writeln!(out, "{}", TOO_SHORT.red())?;
            }
            Err(_) => {
                trace!("length not an integer");
                writeln!(out, "{}", INVALID_INTEGER.red())?;
            }
        }
    }
}

/// Any answer starting with `y` (case-insensitive) is yes.
pub fn get_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    let answer = get_line(input, out, prompt)?;
    Ok(is_yes(&answer))
}

/// Blank answer means none.
pub fn get_optional_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    let answer = get_line(input, out, prompt)?;
    Ok((!answer.is_empty()).then_some(answer))
}

fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}
