//! I/O boundary traits for testability
//!
//! The resolver only needs two facts from the OS: the user's home directory
//! and the process working directory. Tests pass fixed values instead.

use std::io;
use std::path::PathBuf;

/// Process environment abstraction.
pub trait Environment {
    /// Home directory of the current user, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Current working directory of the process.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Real environment backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Fixed environment, for tests and callers that already know both paths.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub home: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
}

impl FixedEnvironment {
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            cwd: Some(cwd.into()),
        }
    }
}

impl Environment for FixedEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "current directory is not available")
        })
    }
}
