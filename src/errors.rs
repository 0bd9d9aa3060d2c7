//! The single error type: an error kind plus a human-readable message.
//!
//! Every failure path builds exactly one `StatusError`; the dispatcher prints
//! its message and returns `exit_code()` as the process status.

use thiserror::Error;

use crate::exitcode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// Bad or missing CLI input, empty path, unresolvable absolute path
    #[error("{0}")]
    InvalidArgument(String),

    /// Home directory lookup failed
    #[error("{0}")]
    Io(String),

    /// Reserved for permission-related failures
    #[error("{0}")]
    PermissionDenied(String),

    /// Anything that does not fit the kinds above
    #[error("{0}")]
    Failure(String),
}

pub type StatusResult<T> = Result<T, StatusError>;

impl StatusError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusError::InvalidArgument(_) => exitcode::EINVAL,
            StatusError::Io(_) => exitcode::EIO,
            StatusError::PermissionDenied(_) => exitcode::EACCES,
            StatusError::Failure(_) => exitcode::FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            StatusError::InvalidArgument(m)
            | StatusError::Io(m)
            | StatusError::PermissionDenied(m)
            | StatusError::Failure(m) => m,
        }
    }
}

/// Writes to stdout/stderr are outside the taxonomy and map to a generic failure.
impl From<std::io::Error> for StatusError {
    fn from(e: std::io::Error) -> Self {
        StatusError::Failure(format!("failed to write output: {}", e))
    }
}
