//! Exit code constants for the makemold CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing/malformed config)
//! - 2: Template error (unresolved placeholder, bad syntax)
//! - 3: Invariant violation (rendered output failed verification)
//! - 4: I/O error (output file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: required fields missing or malformed.
pub const CONFIG_ERROR: i32 = 1;

/// Template error: unresolved placeholder or invalid template syntax.
pub const TEMPLATE_ERROR: i32 = 2;

/// Invariant violation: rendered Makefile failed post-render verification.
pub const INVARIANT_VIOLATION: i32 = 3;

/// I/O error: the output file could not be written.
pub const IO_ERROR: i32 = 4;
