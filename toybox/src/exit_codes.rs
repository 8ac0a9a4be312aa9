//! Stable exit codes for toybox CLI commands.

/// Command succeeded. A missing probe file still counts as success.
pub const OK: i32 = 0;
/// Command failed due to invalid config, arguments, or arithmetic overflow.
pub const INVALID: i32 = 1;
