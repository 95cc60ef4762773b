//! Sequential external-tool runner.
//!
//! Runs an ordered table of linters and formatters one at a time from the
//! project root, printing a percentage progress line before each tool.
//!
//! - **[`core`]**: command table and progress formatting. No I/O.
//! - **[`io`]**: shell invocation, config, root resolution, report files.
//!
//! [`run`] drives the loop; [`report`] renders the optional failure summary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
