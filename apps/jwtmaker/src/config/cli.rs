//! Command line surface.
//!
//! Flags keep their snake_case names and may be written with either one or
//! two leading dashes (`-worker_id w1` and `--worker_id=w1` are equivalent).
//! Single-dash long flags are rewritten before clap sees them.

use std::ffi::OsString;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::params::TokenParams;

/// How failures after parameter validation are reflected in the exit status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExitCodePolicy {
    /// Key read and signing failures exit with 0
    #[default]
    Legacy,
    /// Key read failures exit with 3, key parse and signing failures with 4
    Strict,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "jwtmaker")]
#[command(version, about = "Mint a signed login token for a game runtime worker")]
pub struct Cli {
    #[command(flatten)]
    pub params: TokenParams,

    /// (optional) Use this value as token_id instead of a random UUID
    #[arg(long = "token_id", env = "JWTMAKER_TOKEN_ID", allow_hyphen_values = true)]
    pub token_id: Option<String>,

    /// Exit status reported for key and signing failures
    #[arg(
        long = "exit_code_policy",
        env = "JWTMAKER_EXIT_CODE_POLICY",
        value_enum,
        default_value_t = ExitCodePolicy::Legacy
    )]
    pub exit_code_policy: ExitCodePolicy,
}

impl Cli {
    /// Parse the process arguments, exiting through clap on usage errors.
    pub fn parse_normalized() -> Self {
        match Self::try_parse_normalized(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_flag_args(args, &Self::value_flag_names());
        Self::try_parse_from(args)
    }

    fn value_flag_names() -> Vec<String> {
        Self::command()
            .get_arguments()
            .filter(|arg| arg.get_action().takes_values())
            .filter_map(|arg| arg.get_long())
            .map(str::to_string)
            .collect()
    }
}

/// Long flags clap generates that take no value.
const SWITCHES: [&str; 2] = ["help", "version"];

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value` for every
/// known long flag.
///
/// The argument following a value-taking flag is its value and is never
/// rewritten, even when it starts with `-`. The program name and anything
/// after `--` are untouched.
pub fn normalize_flag_args<I, T>(args: I, value_flags: &[String]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_pending = false;

    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough || value_pending {
            value_pending = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let Some(flag) = arg.to_str().and_then(LongFlag::parse) else {
            out.push(arg);
            continue;
        };

        let takes_value = value_flags.iter().any(|known| known == flag.name);
        if !takes_value && !SWITCHES.contains(&flag.name) {
            out.push(arg);
            continue;
        }

        value_pending = takes_value && !flag.inline_value;
        if flag.single_dash {
            out.push(format!("-{}", flag.raw).into());
        } else {
            out.push(arg);
        }
    }

    out
}

struct LongFlag<'a> {
    raw: &'a str,
    name: &'a str,
    single_dash: bool,
    inline_value: bool,
}

impl<'a> LongFlag<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let (rest, single_dash) = match raw.strip_prefix("--") {
            Some(rest) => (rest, false),
            None => (raw.strip_prefix('-')?, true),
        };
        if rest.is_empty() || rest.starts_with('-') {
            return None;
        }
        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        Some(Self {
            raw,
            name,
            single_dash,
            inline_value,
        })
    }
}
