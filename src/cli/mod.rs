//! CLI layer: argument validation, flag parsing and command dispatch

pub mod args;
pub mod commands;
pub mod output;

pub use args::{validate_first_arg, FirstArg, ResolveArgs};
pub use commands::{execute_command, run, BuildInfo};
