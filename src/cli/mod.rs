//! Command-line mode selection and run loop.

mod context;
mod flags;
pub mod prompts;

use std::io;
use std::process::ExitCode;

use tracing::debug;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::{Error, Result};
use crate::exits;
use crate::pass::clipboard::ClipboardAccess;
use crate::tui;

/// Collect settings from flags or prompts, then generate and deliver.
pub fn run(flags: &CliFlags) -> ExitCode {
    let result = context(flags).and_then(|mut ctx| ctx.run());
    if let Err(e) = &result {
        debug!(error = %e, "run aborted");
        prompts::error(&e.to_string());
    }
    ExitCode::from(exit_status(&result))
}

fn context(flags: &CliFlags) -> Result<Context> {
    let context = if flags.has_explicit_args() {
        debug!("flag mode");
        Context::from_flags(flags)?
    } else {
        debug!("interactive mode");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Context::new(tui::run(&mut stdin.lock(), &mut stdout)?)
    };

    if context.settings.to_clipboard {
        return Ok(context.with_clipboard(ClipboardAccess::system()));
    }
    Ok(context)
}

/// Process exit status for a finished run. Delivery failures alone still
/// count as success since the password was shown.
pub fn exit_status(result: &Result<Vec<Error>>) -> u8 {
    match result {
        Ok(failures) if failures.iter().all(Error::is_delivery) => exits::SUCCESS,
        _ => exits::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn clean_run_succeeds() {
        assert_eq!(exit_status(&Ok(Vec::new())), exits::SUCCESS);
    }

    #[test]
    fn blocking_errors_fail() {
        for err in [
            Error::InvalidLength { length: 3, min: 6 },
            Error::InvalidLength { length: -3, min: 6 },
            Error::LengthTooLong {
                length: 100_000_000_000_000,
                max: 4096,
            },
            Error::EmptyAlphabet,
            Error::InputClosed,
            Error::Io(io::Error::other("stdout closed")),
        ] {
            let shown = err.to_string();
            assert_eq!(exit_status(&Err(err)), exits::FAILURE, "{shown}");
        }
    }

    #[test]
    fn delivery_failures_still_succeed() {
        let failures = vec![
            Error::FileWrite {
                path: PathBuf::from("/nope/pw.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
            Error::ClipboardUnavailable("no display".into()),
            Error::Clipboard("locked".into()),
            Error::StatusWrite(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
        ];
        assert_eq!(exit_status(&Ok(failures)), exits::SUCCESS);
    }

    #[test]
    fn non_delivery_failure_in_list_fails() {
        let failures = vec![Error::InputClosed];
        assert_eq!(exit_status(&Ok(failures)), exits::FAILURE);
    }

    #[test]
    fn negative_flag_length_exits_one() {
        use clap::Parser;

        for args in [&["strongpass", "-l", "-3"][..], &["strongpass", "--length=-3"][..]] {
            let flags = CliFlags::try_parse_from(args).unwrap();
            let result = context(&flags).map(|_| Vec::new());
            assert!(matches!(result, Err(Error::InvalidLength { length: -3, .. })));
            assert_eq!(exit_status(&result), exits::FAILURE, "{args:?}");
        }
    }
}
