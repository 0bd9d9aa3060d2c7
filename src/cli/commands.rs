//! Command dispatch: branch on the first argument, map outcomes to exit codes

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, instrument};

use crate::cli::args::{validate_first_arg, FirstArg, ResolveArgs};
use crate::cli::output;
use crate::errors::{StatusError, StatusResult};
use crate::exitcode;
use crate::infrastructure::Environment;
use crate::logging::setup_logging;
use crate::util::path::resolve_path_with;

pub const NO_ARGS_NOTICE: &str = "no args are presented";

pub const USAGE: &str = "\
Usage of 'abspath': abspath [option] [flags]

Application used for get absolute from relative path.

Options (only one required)
    - r: resolve the path given with -f
    - info: info about application

Flags (all required):
    -f <path>: relative or absolute path

Examples:
    abspath r -f /var/lib/rpm/rpmdb.sqlite
    abspath r -f ~/docs
    abspath info";

/// Build metadata reported by `info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub description: &'static str,
    pub version: &'static str,
    pub commit: &'static str,
}

impl BuildInfo {
    /// Values fixed at compile time; the commit hash comes from build.rs.
    pub fn current() -> Self {
        Self {
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
            commit: env!("ABSPATH_COMMIT_HASH"),
        }
    }
}

/// Run one invocation and return the process exit code.
///
/// `args` excludes the program name and is kept as `OsString`, so paths that
/// are not valid UTF-8 reach the resolver unchanged. Success output goes to
/// `out`; the no-args notice and every error go to `err`.
pub fn run<I, T>(args: I, env: &impl Environment, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match execute_command(&args, env, out, err) {
        Ok(()) => exitcode::SUCCESS,
        Err(e) => {
            // nothing left to report to if stderr is gone
            let _ = output::error(err, &e);
            e.exit_code()
        }
    }
}

pub fn execute_command(
    args: &[OsString],
    env: &impl Environment,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> StatusResult<()> {
    let Some(first) = args.first() else {
        return _no_args(out, err);
    };

    // a non-UTF-8 token turns into U+FFFD here and can never match
    match validate_first_arg(&first.to_string_lossy())? {
        FirstArg::Info => _info(&BuildInfo::current(), out),
        FirstArg::Resolve => _resolve(args, env, out),
    }
}

fn _no_args(out: &mut dyn Write, err: &mut dyn Write) -> StatusResult<()> {
    output::info(err, NO_ARGS_NOTICE)?;
    output::info(out, USAGE)?;
    Ok(())
}

fn _info(info: &BuildInfo, out: &mut dyn Write) -> StatusResult<()> {
    output::field(out, "Info", info.description)?;
    output::field(out, "Version", info.version)?;
    output::field(out, "Commit", info.commit)?;
    Ok(())
}

/// `args[0]` is `r` itself and takes the program-name slot for clap.
#[instrument(level = "debug", skip(env, out))]
fn _resolve(args: &[OsString], env: &impl Environment, out: &mut dyn Write) -> StatusResult<()> {
    let parsed = match ResolveArgs::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            output::info(out, &e.render())?;
            return Ok(());
        }
        Err(e) => {
            let rendered = e.render().to_string();
            let reason = rendered.trim_start_matches("error: ").trim_end();
            return Err(StatusError::invalid_argument(format!("{}\n\n{}", reason, USAGE)));
        }
    };

    setup_logging(parsed.debug);
    debug!("file: {:?}", parsed.file);

    let absolute = resolve_path_with(&parsed.file, env)?;
    output::field_os(out, "Relative path", &parsed.file)?;
    output::field_os(out, "Absolute path", absolute.as_os_str())?;
    Ok(())
}
