//! I/O helpers for toolrun commands.

pub mod config;
pub mod report;
pub mod root;
pub mod shell;
