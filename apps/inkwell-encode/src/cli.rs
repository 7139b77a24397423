//! Argument handling for `inkwell-encode`, kept apart from process setup so
//! it can be exercised directly.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use inkwell_credentials::EncoderRegistry;

/// Exit status for malformed invocations.
const MISUSE: u8 = 2;

/// Print the stored form of a credential.
///
/// clap only renders `--help` and `--version` from this. Three arguments are
/// always taken literally, whatever they look like.
#[derive(Debug, Parser)]
#[command(name = "inkwell-encode", version, about)]
pub struct Cli {
    /// Encoder name, e.g. `sha256`
    pub algorithm: String,

    /// Username, used as salt by the digest encoders
    pub username: String,

    /// Raw credential to encode
    pub password: String,
}

/// Result of one invocation. Every variant prints exactly one message.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The encoded credential, printed verbatim.
    Encoded(String),
    /// `--help` or `--version` output.
    Info(String),
    /// Wrong number or shape of arguments.
    Usage(String),
    /// Arguments were well-formed but could not be encoded.
    Rejected(String),
}

impl Outcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            // clap ends rendered help with a newline of its own
            Self::Info(m) => m.trim_end(),
            Self::Encoded(m) | Self::Usage(m) | Self::Rejected(m) => m,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Encoded(_) | Self::Info(_) => ExitCode::SUCCESS,
            Self::Usage(_) | Self::Rejected(_) => ExitCode::from(MISUSE),
        }
    }
}

/// One-line usage text naming every registered encoder.
#[must_use]
pub fn usage(registry: &EncoderRegistry) -> String {
    let names: Vec<&str> = registry.names().collect();
    format!(
        "Usage : inkwell-encode [{}] username password",
        names.join("|")
    )
}

/// Interpret `args` (program name first) and encode.
///
/// Exactly three arguments are always algorithm, username and password.
/// A lone `--help` or `--version` is answered by clap. Anything else prints
/// the usage line. No digest is computed unless the encoder exists.
pub fn run<I, T>(args: I, registry: &EncoderRegistry) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args
        .next()
        .unwrap_or_else(|| OsString::from("inkwell-encode"));
    let rest: Vec<OsString> = args.collect();

    match <[OsString; 3]>::try_from(rest) {
        Ok(triple) => encode(triple, registry),
        Err(rest) if rest.len() == 1 => informational(program, rest, registry),
        Err(rest) => {
            tracing::debug!(count = rest.len(), "wrong argument count");
            Outcome::Usage(usage(registry))
        }
    }
}

fn encode(args: [OsString; 3], registry: &EncoderRegistry) -> Outcome {
    let [algorithm, username, password] = args.map(OsString::into_string);
    let (Ok(algorithm), Ok(username), Ok(password)) = (algorithm, username, password) else {
        tracing::debug!("argument is not valid UTF-8");
        return Outcome::Usage(usage(registry));
    };
    let cli = Cli {
        algorithm,
        username,
        password,
    };

    match registry.encode(&cli.algorithm, &cli.username, &cli.password) {
        Ok(encoded) => Outcome::Encoded(encoded),
        Err(e) => {
            tracing::debug!(algorithm = %cli.algorithm, error = %e, "credential not encoded");
            Outcome::Rejected(e.to_string())
        }
    }
}

fn informational(program: OsString, rest: Vec<OsString>, registry: &EncoderRegistry) -> Outcome {
    match Cli::try_parse_from(std::iter::once(program).chain(rest)) {
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Outcome::Info(e.to_string())
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "malformed invocation");
            Outcome::Usage(usage(registry))
        }
        // three positionals are required, so a single argument never parses
        Ok(_) => Outcome::Usage(usage(registry)),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const USAGE: &str = "Usage : inkwell-encode [md5|plaintext|sha|sha256] username password";

    fn run_with(args: &[&str]) -> Outcome {
        let registry = EncoderRegistry::with_builtin();
        run(std::iter::once("inkwell-encode").chain(args.iter().copied()), &registry)
    }

    #[test]
    fn test_plaintext_prints_password() {
        assert_eq!(
            run_with(&["plaintext", "alice", "secret"]),
            Outcome::Encoded("secret".to_owned())
        );
    }

    #[test]
    fn test_plaintext_keeps_surrounding_whitespace() {
        let outcome = run_with(&["plaintext", "alice", " secret "]);

        assert_eq!(outcome.message(), " secret ");
        assert_eq!(outcome, Outcome::Encoded(" secret ".to_owned()));
    }

    #[test]
    fn test_digest_uses_username_as_salt() {
        assert_eq!(
            run_with(&["sha", "alice", "secret"]),
            Outcome::Encoded("c1cfafa082a69ea42336731a1a814a954075ee54".to_owned())
        );
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let outcome = run_with(&["rot13", "alice", "secret"]);

        assert_eq!(
            outcome.message(),
            "Algorithm must be one of md5, plaintext, sha, sha256"
        );
        assert!(matches!(outcome, Outcome::Rejected(_)));
    }

    #[test]
    fn test_wrong_argument_count_prints_usage() {
        let cases: [&[&str]; 6] = [
            &[],
            &["md5"],
            &["md5", "alice"],
            &["md5", "alice", "secret", "extra"],
            &["plaintext", "alice", "secret", "--help"],
            &["--help", "--version"],
        ];
        for args in cases {
            let outcome = run_with(args);
            assert_eq!(outcome, Outcome::Usage(USAGE.to_owned()), "args: {args:?}");
        }
    }

    #[test]
    fn test_three_arguments_are_taken_literally() {
        let cases = [
            (["plaintext", "alice", "-secret"], "-secret"),
            (["plaintext", "alice", "-h"], "-h"),
            (["plaintext", "alice", "--"], "--"),
            (["plaintext", "--help", "--version"], "--version"),
        ];
        for (args, expected) in cases {
            assert_eq!(
                run_with(&args),
                Outcome::Encoded(expected.to_owned()),
                "args: {args:?}"
            );
        }
    }

    #[test]
    fn test_flag_like_algorithm_is_an_unknown_algorithm() {
        let outcome = run_with(&["-x", "alice", "secret"]);

        assert_eq!(
            outcome,
            Outcome::Rejected("Algorithm must be one of md5, plaintext, sha, sha256".to_owned())
        );
    }

    #[test]
    fn test_braces_in_username_are_hashed() {
        assert_eq!(
            run_with(&["md5", "a{b", "secret"]),
            Outcome::Encoded("9be7d4e52c80425c930e0249afd5c448".to_owned())
        );
    }

    #[test]
    fn test_help_is_informational() {
        let outcome = run_with(&["--help"]);

        assert!(matches!(outcome, Outcome::Info(_)));
        assert!(outcome.message().contains("Usage:"));
        assert!(!outcome.message().ends_with('\n'));
    }

    #[test]
    fn test_version_is_informational() {
        let outcome = run_with(&["--version"]);

        assert!(matches!(outcome, Outcome::Info(_)));
        assert!(outcome.message().starts_with("inkwell-encode "));
    }

    #[test]
    fn test_lone_unknown_flag_prints_usage() {
        assert_eq!(run_with(&["-x"]), Outcome::Usage(USAGE.to_owned()));
    }
}
