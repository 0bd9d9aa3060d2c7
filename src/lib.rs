//! Resolve relative or `~`-prefixed paths into clean absolute paths.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod infrastructure;
pub mod logging;
pub mod util;

pub use errors::{StatusError, StatusResult};
pub use util::path::{resolve_path, resolve_path_with};
