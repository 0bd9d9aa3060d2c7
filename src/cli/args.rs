//! CLI argument definitions: the first positional token and the `r` flags

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use clap::{ArgAction, Parser, ValueHint};

use crate::errors::{StatusError, StatusResult};

/// Commands accepted as the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstArg {
    /// `r`: resolve the path given with `-f`
    Resolve,
    /// `info`: print build metadata
    Info,
}

impl FirstArg {
    pub const ALL: [FirstArg; 2] = [FirstArg::Resolve, FirstArg::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            FirstArg::Resolve => "r",
            FirstArg::Info => "info",
        }
    }
}

impl fmt::Display for FirstArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FirstArg {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FirstArg::ALL
            .into_iter()
            .find(|arg| arg.as_str() == s)
            .ok_or_else(|| {
                StatusError::invalid_argument(format!(
                    "invalid positional arg1. Allowed options are: {}",
                    allowed_options()
                ))
            })
    }
}

/// Allowed first arguments joined by ", ".
pub fn allowed_options() -> String {
    FirstArg::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check the first positional argument against the allowed set.
pub fn validate_first_arg(arg: &str) -> StatusResult<FirstArg> {
    arg.parse()
}

/// Flags of the `r` command, parsed once per invocation
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "r", bin_name = "abspath r")]
#[command(about = "Resolve a relative or ~-prefixed path to an absolute path", long_about = None)]
#[command(disable_version_flag = true)]
pub struct ResolveArgs {
    /// Relative or absolute path
    #[arg(short = 'f', value_name = "PATH", value_hint = ValueHint::AnyPath, allow_hyphen_values = true)]
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub file: OsString,

    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// Flag parsing stops at the first operand; it and everything after it is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub ignored: Vec<OsString>,
}
