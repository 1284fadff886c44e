//! CLI context - bundles settings and clipboard state.

use std::io::{self, Write};

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use tracing::{debug, info};

use super::{CliFlags, prompts};
use crate::error::{Error, Result};
use crate::pass::clipboard::ClipboardAccess;
use crate::pass::{self, output};
use crate::settings::{DEFAULT_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::stdout_is_tty;

/// Application context for one generate-and-emit run.
pub struct Context {
    pub settings: Settings,
    clipboard: Option<ClipboardAccess>,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            clipboard: None,
        }
    }

    /// Build settings from command-line flags.
    ///
    /// A negative `--length` is rejected here with the same error as any
    /// other length below the minimum.
    pub fn from_flags(flags: &CliFlags) -> Result<Self> {
        let pass_length = match flags.length {
            None => DEFAULT_LENGTH,
            Some(n) => usize::try_from(n).map_err(|_| Error::InvalidLength {
                length: n,
                min: MIN_LENGTH,
            })?,
        };
        Ok(Self::new(Settings {
            pass_length,
            special: flags.special,
            digits: flags.digits,
            output_file_path: flags.file.clone(),
            to_clipboard: flags.clipboard,
        }))
    }

    /// Use `access` instead of opening the system clipboard.
    pub fn with_clipboard(mut self, access: ClipboardAccess) -> Self {
        self.clipboard = Some(access);
        self
    }

    /// Generate with the OS RNG, print to stdout, warn about delivery
    /// problems and hand them back.
    pub fn run(&mut self) -> Result<Vec<Error>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let failures = self.generate_output(&mut OsRng, &mut out, stdout_is_tty())?;
        drop(out);

        for failure in &failures {
            prompts::warn(&failure.to_string());
            if matches!(failure, Error::Clipboard(_) | Error::ClipboardUnavailable(_)) {
                prompts::warn(prompts::clipboard_fallback());
            }
        }
        Ok(failures)
    }

    /// Generate one password, print it, then save and copy as requested.
    ///
    /// Returns the delivery failures; generation failures and a password that
    /// never reached `out` are the `Err` case. Once the password is out, every
    /// later failure is collected so the remaining steps still run.
    pub fn generate_output<R, W>(&mut self, rng: &mut R, out: &mut W, boxed: bool) -> Result<Vec<Error>>
    where
        R: Rng + CryptoRng + ?Sized,
        W: Write,
    {
        let policy = self.settings.policy()?;
        debug!(?policy, "policy accepted");

        let password = pass::generate(&policy, rng)?;
        output::print(out, &password, boxed)?;

        let mut failures = Vec::new();

        if let Some(path) = &self.settings.output_file_path {
            match output::save_to_file(&password, path) {
                Ok(()) => {
                    let msg = prompts::password_saved(&output::display_path(path));
                    status(out, &msg, &mut failures);
                }
                Err(e) => {
                    debug!(error = %e, "file delivery failed");
                    failures.push(e);
                }
            }
        }

        if self.settings.to_clipboard {
            let clipboard = self.clipboard.get_or_insert_with(ClipboardAccess::system);
            debug!(available = clipboard.is_available(), "clipboard requested");
            match clipboard.copy(&password) {
                Ok(()) => {
                    info!("password copied to clipboard");
                    status(out, prompts::clipboard_copied(), &mut failures);
                }
                Err(e) => {
                    debug!(error = %e, "clipboard delivery failed");
                    failures.push(e);
                }
            }
        }

        if let Err(e) = out.flush() {
            failures.push(Error::StatusWrite(e));
        }
        Ok(failures)
    }
}

/// Write one status line, recording a failure instead of aborting.
fn status<W: Write>(out: &mut W, msg: &str, failures: &mut Vec<Error>) {
    if let Err(e) = writeln!(out, "{msg}") {
        debug!(error = %e, "status line not written");
        failures.push(Error::StatusWrite(e));
    }
}
