//! Interactive prompt sequence.

mod input;
mod text;

use std::io::{BufRead, Write};

use tracing::debug;

pub use input::*;
pub use text::*;

use crate::error::Result;
use crate::settings::{MIN_LENGTH, Settings};

/// Ask for every setting in turn and return the answers.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Settings> {
    print_header(out)?;

    let pass_length = get_numeric_input(input, out, LENGTH_PROMPT, MIN_LENGTH)?;
    let special = get_yes_no(input, out, SPECIAL_PROMPT)?;
    let digits = get_yes_no(input, out, DIGITS_PROMPT)?;
    let output_file_path = get_optional_input(input, out, FILE_PROMPT)?.map(Into::into);
    let to_clipboard = get_yes_no(input, out, CLIPBOARD_PROMPT)?;

    let settings = Settings {
        pass_length,
        special,
        digits,
        output_file_path,
        to_clipboard,
    };
    debug!(
        length = settings.pass_length,
        special,
        digits,
        file = settings.output_file_path.is_some(),
        clipboard = to_clipboard,
        "interactive settings collected"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use super::*;
    use crate::error::Error;

    fn answer(script: &str) -> (Result<Settings>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn full_sequence() {
        let (result, out) = answer("16\ny\nYes\nsecret.txt\nn\n");
        let settings = result.unwrap();
        assert_eq!(
            settings,
            Settings {
                pass_length: 16,
                special: true,
                digits: true,
                output_file_path: Some(PathBuf::from("secret.txt")),
                to_clipboard: false,
            }
        );
        assert!(out.starts_with("=== Strong Password Generator ==="));
        for prompt in [
            LENGTH_PROMPT,
            SPECIAL_PROMPT,
            DIGITS_PROMPT,
            FILE_PROMPT,
            CLIPBOARD_PROMPT,
        ] {
            assert!(out.contains(prompt), "missing prompt {prompt:?}");
        }
    }

    #[test]
    fn length_reprompts_until_valid() {
        let (result, out) = answer("abc\n3\n\n8\nn\nn\n\nn\n");
        let settings = result.unwrap();
        assert_eq!(settings.pass_length, 8);
        assert_eq!(out.matches(LENGTH_PROMPT).count(), 4);
        assert_eq!(out.matches(INVALID_INTEGER).count(), 2);
        assert_eq!(out.matches(TOO_SHORT).count(), 1);
    }

    #[test]
    fn blank_answers_mean_no() {
        let (result, _) = answer("6\n\n\n\n\n");
        let settings = result.unwrap();
        assert_eq!(settings.pass_length, 6);
        assert!(!settings.special && !settings.digits && !settings.to_clipboard);
        assert!(settings.output_file_path.is_none());
    }

    #[test]
    fn eof_mid_sequence_is_an_error() {
        let (result, _) = answer("12\ny\n");
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
