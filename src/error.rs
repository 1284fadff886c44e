//! Error types for password generation and delivery.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a policy, generating, or delivering a password.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length is below the minimum.
    #[error("Password length must be at least {min} (got {length}).")]
    InvalidLength { length: i64, min: usize },

    /// Requested length is above the maximum.
    #[error("Password length must be at most {max} (got {length}).")]
    LengthTooLong { length: usize, max: usize },

    /// No character class is enabled.
    #[error("No valid character sets provided for password generation.")]
    EmptyAlphabet,

    /// Length cannot hold one character from every required class.
    #[error("Password length {length} cannot hold {required} required character classes.")]
    LengthBelowRequired { length: usize, required: usize },

    /// Writing the password file failed.
    #[error("Error saving to file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No system clipboard could be opened.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The clipboard rejected the copy.
    #[error("Error copying to clipboard: {0}")]
    Clipboard(String),

    /// A status line after the password could not be written.
    #[error("Error writing status message: {0}")]
    StatusWrite(#[source] io::Error),

    /// Terminal or prompt I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stdin closed before all prompts were answered.
    #[error("Input closed before all prompts were answered.")]
    InputClosed,
}

impl Error {
    /// Delivery errors are reported but never change the exit status.
    pub fn is_delivery(&self) -> bool {
        matches!(
            self,
            Error::FileWrite { .. }
                | Error::ClipboardUnavailable(_)
                | Error::Clipboard(_)
                | Error::StatusWrite(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
