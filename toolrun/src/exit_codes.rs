//! Stable exit codes for toolrun CLI commands.

/// Every tool ran. Tool outcomes do not affect this unless strict mode is on.
pub const OK: i32 = 0;
/// Invalid config, unresolvable root anchor, or another runner-level error.
pub const INVALID: i32 = 1;
/// Strict mode only: at least one tool did not exit 0.
pub const TOOL_FAILED: i32 = 2;
