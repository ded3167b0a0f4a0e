//! Exit codes for the CLI

/// Success
pub const SUCCESS: u8 = 0;

/// Any failure: a precondition (repository, remote, log) or a runtime error
pub const ERROR: u8 = 1;
