//! Process exit codes (errno-style values)

/// Successful termination
pub const SUCCESS: i32 = 0;

/// Generic failure outside the known error kinds
pub const FAILURE: i32 = 1;

/// Invalid argument
pub const EINVAL: i32 = 2;

/// Input/output error
pub const EIO: i32 = 5;

/// Permission denied
pub const EACCES: i32 = 13;
