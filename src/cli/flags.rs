use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Strong password generator.
///
/// Runs interactively when none of the generation options is given.
#[derive(Debug, Default, Parser)]
#[command(name = "strongpass", version, about, long_about = None)]
pub struct CliFlags {
    /// Length of the password (minimum 6) [default: 12]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Include special characters (e.g., !@#$%)
    #[arg(short, long)]
    pub special: bool,

    /// Include digits (0-9)
    #[arg(short, long)]
    pub digits: bool,

    /// Save password to a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Copy password to clipboard
    #[arg(short, long)]
    pub clipboard: bool,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CliFlags {
    /// True when any generation option was given. Logging flags don't count.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some() || self.special || self.digits || self.file.is_some() || self.clipboard
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("strongpass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_args_is_interactive() {
        assert!(!parse(&[]).has_explicit_args());
    }

    #[test]
    fn logging_flags_stay_interactive() {
        let flags = parse(&["-vv"]);
        assert!(!flags.has_explicit_args());
        assert_eq!(flags.log_level(), "trace");
        assert_eq!(parse(&["-q"]).log_level(), "error");
        assert_eq!(parse(&[]).log_level(), "warn");
    }

    #[test]
    fn each_generation_flag_selects_flag_mode() {
        for args in [
            &["-l", "20"][..],
            &["-s"],
            &["-d"],
            &["-f", "out.txt"],
            &["-c"],
            &["--special", "--digits"],
        ] {
            assert!(parse(args).has_explicit_args(), "{args:?}");
        }
    }

    #[test]
    fn long_forms() {
        let flags = parse(&["--length", "9", "--file", "p.txt", "--clipboard"]);
        assert_eq!(flags.length, Some(9));
        assert_eq!(flags.file, Some(PathBuf::from("p.txt")));
        assert!(flags.clipboard);
    }

    #[test]
    fn rejects_non_numeric_length() {
        assert!(CliFlags::try_parse_from(["strongpass", "-l", "ten"]).is_err());
        assert!(CliFlags::try_parse_from(["strongpass", "-l", "1.5"]).is_err());
    }

    #[test]
    fn accepts_negative_length() {
        // Range is checked later so a negative length exits like any short one.
        for args in [&["-l", "-3"][..], &["--length=-3"], &["-l=-3"], &["--length", "-3"]] {
            let flags = parse(args);
            assert_eq!(flags.length, Some(-3), "{args:?}");
            assert!(flags.has_explicit_args());
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(CliFlags::try_parse_from(["strongpass", "-q", "-v"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        CliFlags::command().debug_assert();
    }
}
