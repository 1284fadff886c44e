//! Password delivery: terminal, file, clipboard.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::Password;
use crate::error::{Error, Result};
use crate::terminal::{BOX_INNER_WIDTH, box_bottom, box_line, box_top};

/// Write the password to `out`.
///
/// With `boxed` set and a password that fits, it is framed for the terminal;
/// otherwise it is written bare so pipes get exactly one line.
pub fn print<W: Write>(out: &mut W, password: &Password, boxed: bool) -> io::Result<()> {
    if boxed && password.len() <= BOX_INNER_WIDTH {
        writeln!(out)?;
        box_top(out, "Generated Password")?;
        box_line(out, password.as_str())?;
        box_bottom(out)?;
    } else {
        writeln!(out, "{}", password.as_str())?;
    }
    out.flush()
}

/// Write the password plus a trailing newline to `path`, replacing any
/// existing file.
pub fn save_to_file(password: &Password, path: &Path) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let mut line = Zeroizing::new(String::with_capacity(password.len() + 1));
        line.push_str(password.as_str());
        line.push('\n');
        file.write_all(line.as_bytes())?;
        file.flush()
    };

    write().map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "password saved");
    Ok(())
}

/// Absolute path for messages, falling back to the path as given.
pub fn display_path(path: &Path) -> String {
    std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|e| {
            debug!(error = %e, "canonicalize failed");
            path.display().to_string()
        })
}
