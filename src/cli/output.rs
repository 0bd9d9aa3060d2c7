//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. Every helper
//! takes its writer explicitly so the dispatcher can be driven from tests.

use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix)
pub fn error(w: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}: {}", "error".red().bold(), msg)
}

/// Print plain line (no color, for data output and notices)
pub fn info(w: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

/// Print labelled value, e.g. `Absolute path: /tmp/x`
pub fn field(w: &mut dyn Write, label: &str, value: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}: {}", label, value)
}

/// Print labelled OS string as raw bytes, so non-UTF-8 paths are not altered
pub fn field_os(w: &mut dyn Write, label: &str, value: &OsStr) -> io::Result<()> {
    write!(w, "{}: ", label)?;
    w.write_all(value.as_encoded_bytes())?;
    writeln!(w)
}
